//! Error types for the NBA fantasy stats service

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

/// Message returned to clients for any upstream failure. Details stay in the logs.
pub const UPSTREAM_PUBLIC_MESSAGE: &str = "Failed to fetch NBA stats";

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Player name required")]
    InvalidInput,

    #[error("Player '{name}' not found")]
    PlayerNotFound { name: String },

    #[error("No stats found for {name} in season {season}")]
    StatsNotFound { name: String, season: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Upstream response from {endpoint} has no result set")]
    MissingResultSet { endpoint: String },

    #[error("Malformed upstream table: {message}")]
    MalformedTable { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl StatsError {
    /// True for transport failures, non-2xx responses and malformed payloads.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            StatsError::Http(_)
                | StatsError::UpstreamStatus { .. }
                | StatsError::Json(_)
                | StatsError::MissingResultSet { .. }
                | StatsError::MalformedTable { .. }
        )
    }

    /// HTTP status the inbound API answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            StatsError::InvalidInput => 400,
            StatsError::PlayerNotFound { .. } | StatsError::StatsNotFound { .. } => 404,
            _ => 500,
        }
    }

    /// Client-facing message. Server-side failures collapse to a generic line.
    pub fn public_message(&self) -> String {
        if self.status_code() >= 500 {
            UPSTREAM_PUBLIC_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<anyhow::Error> for StatsError {
    fn from(err: anyhow::Error) -> Self {
        StatsError::InvalidConfig {
            message: err.to_string(),
        }
    }
}
