//! Type-safe wrappers and enums for NBA stats data.

pub mod ids;
pub mod season;
pub mod strategy;

pub use ids::PersonId;
pub use season::{Season, DEFAULT_SEASON};
pub use strategy::{ResolverKind, SeasonPolicy};
