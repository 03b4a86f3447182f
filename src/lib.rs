//! NBA Fantasy Stats Library
//!
//! Resolves a typed player name and a season into that season's per-game
//! line from the NBA stats service, plus a derived fantasy score.
//!
//! ## Pipeline
//!
//! - **Player Resolver**: case-insensitive substring match against the current
//!   roster, falling back to the full historical roster. A static player
//!   directory can stand in for the live roster.
//! - **Career Stats Selector**: fetches per-game career lines and picks the
//!   requested season, then scores it:
//!   `PTS + 1.2*REB + 1.5*AST + 3*STL + 3*BLK - TOV`, rounded to 2 decimals.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_fantasy::{config::PipelineConfig, service::StatsService, Season};
//!
//! # async fn example() -> nba_fantasy::Result<()> {
//! let service = StatsService::from_config(&PipelineConfig::default())?;
//! let stats = service.player_stats("LeBron", &Season::new("2023-24")).await?;
//! println!("{} => {}", stats.player, stats.fantasy_score);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_FANTASY_ALLOWED_ORIGIN=http://localhost:5173
//! export NBA_STATS_BASE_URL=https://stats.nba.com/stats
//! export NBA_FANTASY_DIRECTORY=~/.local/share/nba-fantasy/players.json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod nba;
pub mod server;
pub mod service;

// Re-export commonly used types
pub use cli::types::{PersonId, ResolverKind, Season, SeasonPolicy};
pub use error::{Result, StatsError};
pub use nba::types::{PlayerRecord, StatsResponse};
