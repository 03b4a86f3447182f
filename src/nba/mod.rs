//! NBA stats service access and the resolution pipeline pieces
//!
//! - `http`: upstream client and endpoint helpers
//! - `types`: tabular results, player records, season lines, responses
//! - `compute`: numeric coercion and fantasy scoring
//! - `resolver` / `directory`: name-to-player strategies
//! - `selector`: season selection over career stats

pub mod compute;
pub mod directory;
pub mod http;
pub mod resolver;
pub mod selector;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use directory::{DirectoryResolver, PlayerDirectory};
pub use http::{HttpStatsApi, StatsApi, UpstreamConfig};
pub use resolver::{PlayerResolver, RosterResolver};
pub use selector::CareerStatsSelector;
pub use types::{PlayerRecord, SeasonStatRow, StatsResponse, TabularResult};
