//! Runtime configuration resolved from CLI flags and environment variables.

use reqwest::Url;
use std::{net::SocketAddr, path::PathBuf, time::Duration};

use crate::{
    cli::{
        types::{ResolverKind, SeasonPolicy},
        PipelineArgs,
    },
    error::{Result, StatsError},
    nba::{directory::default_directory_path, http::UpstreamConfig},
};

#[cfg(test)]
mod tests;

pub const ALLOWED_ORIGIN_ENV_VAR: &str = "NBA_FANTASY_ALLOWED_ORIGIN";
pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
pub const DIRECTORY_ENV_VAR: &str = "NBA_FANTASY_DIRECTORY";

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Everything the resolution pipeline needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub upstream: UpstreamConfig,
    pub resolver: ResolverKind,
    pub directory: PathBuf,
    pub policy: SeasonPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            upstream: UpstreamConfig::default(),
            resolver: ResolverKind::default(),
            directory: default_directory_path(),
            policy: SeasonPolicy::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_args(args: &PipelineArgs) -> Self {
        let mut upstream =
            UpstreamConfig::default().with_timeout(Duration::from_secs(args.timeout_secs));
        if let Some(base_url) = resolve_base_url(args.base_url.clone()) {
            upstream = upstream.with_base_url(base_url);
        }

        Self {
            upstream,
            resolver: args.resolver,
            directory: resolve_directory(args.directory.clone()),
            policy: args.season_policy,
        }
    }
}

/// Listener settings for `serve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub allowed_origin: String,
}

impl ServerConfig {
    pub fn new(bind: &str, allowed_origin: Option<String>) -> Result<Self> {
        let bind = bind.parse().map_err(|e| StatsError::InvalidConfig {
            message: format!("invalid bind address '{}': {}", bind, e),
        })?;
        Ok(Self {
            bind,
            allowed_origin: resolve_allowed_origin(allowed_origin)?,
        })
    }
}

/// CORS origin from the flag, `NBA_FANTASY_ALLOWED_ORIGIN`, or the default.
pub fn resolve_allowed_origin(origin: Option<String>) -> Result<String> {
    let raw = origin
        .or_else(|| std::env::var(ALLOWED_ORIGIN_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
    normalize_origin(&raw)
}

/// Reduce an absolute http(s) URL to its `scheme://host[:port]` origin.
pub fn normalize_origin(raw: &str) -> Result<String> {
    let invalid = |reason: &str| StatsError::InvalidConfig {
        message: format!("invalid allowed origin '{}': {}", raw, reason),
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("origin cannot carry a path, query or fragment"));
    }

    Ok(url.origin().ascii_serialization())
}

/// Stats base URL from the flag or `NBA_STATS_BASE_URL`.
pub fn resolve_base_url(base_url: Option<String>) -> Option<String> {
    base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|s| !s.trim().is_empty())
}

/// Directory path from the flag, `NBA_FANTASY_DIRECTORY`, or the data dir default.
pub fn resolve_directory(directory: Option<PathBuf>) -> PathBuf {
    directory
        .or_else(|| std::env::var_os(DIRECTORY_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(default_directory_path)
}
