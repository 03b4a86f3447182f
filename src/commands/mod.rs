//! Command implementations for the NBA fantasy CLI

pub mod serve;
pub mod stats;

pub use serve::handle_serve;
pub use stats::{handle_stats, StatsParams};
