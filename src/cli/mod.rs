//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{ResolverKind, Season, SeasonPolicy};

/// Pipeline options shared by every command
#[derive(Debug, Clone, Args)]
pub struct PipelineArgs {
    /// Player resolution strategy.
    #[clap(long, value_enum, default_value_t = ResolverKind::default())]
    pub resolver: ResolverKind,

    /// Player directory file for `--resolver directory` (or set `NBA_FANTASY_DIRECTORY`).
    #[clap(long)]
    pub directory: Option<PathBuf>,

    /// How the requested season is matched against career rows.
    #[clap(long, value_enum, default_value_t = SeasonPolicy::default())]
    pub season_policy: SeasonPolicy,

    /// Stats service base URL (or set `NBA_STATS_BASE_URL`).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Timeout for each upstream request, in seconds.
    #[clap(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Log at debug level.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve `GET /api/stats?name=..&season=..` over HTTP
    Serve {
        #[clap(flatten)]
        pipeline: PipelineArgs,

        /// Address to listen on.
        #[clap(long, default_value = "127.0.0.1:5000")]
        bind: String,

        /// Origin allowed by CORS (or set `NBA_FANTASY_ALLOWED_ORIGIN`).
        #[clap(long)]
        allowed_origin: Option<String>,
    },

    /// Look up one player's season line and fantasy score.
    Stats {
        #[clap(flatten)]
        pipeline: PipelineArgs,

        /// Player name, full or partial (case-insensitive).
        #[clap(long, short)]
        name: String,

        /// Season, e.g. 2023-24.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Output the response as JSON instead of a text line.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-fantasy", about = "NBA per-game stats and fantasy scores")]
pub struct NbaFantasy {
    #[clap(subcommand)]
    pub command: Commands,
}
