use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, HOST, ORIGIN, REFERER, USER_AGENT},
    Client,
};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::{
    cli::types::{PersonId, Season},
    error::{Result, StatsError},
    nba::types::TabularResult,
};


/// Base path for the NBA stats API.
pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Roster listing endpoint.
pub const COMMON_ALL_PLAYERS: &str = "commonallplayers";
/// Career per-season statistics endpoint.
pub const PLAYER_CAREER_STATS: &str = "playercareerstats";

/// NBA league id on the stats service.
pub const NBA_LEAGUE_ID: &str = "00";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.5993.70 Safari/537.36";

/// Headers the stats service expects from a browser. Requests without them
/// are rejected or left hanging.
pub fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(HOST, HeaderValue::from_static("stats.nba.com"));
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h
}

/// Immutable upstream settings, fixed when the client is built.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub headers: HeaderMap,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: NBA_STATS_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: browser_headers(),
        }
    }
}

impl UpstreamConfig {
    /// Point at another host (a mirror, or a mock server in tests).
    ///
    /// The `Host` header is dropped so the transport derives it from the URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        if self.base_url != NBA_STATS_BASE_URL {
            self.headers.remove(HOST);
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Tabular GET access to the stats service.
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// Fetch `endpoint` with `params` and decode its first result set.
    async fn get_table(&self, endpoint: &str, params: &[(&str, String)]) -> Result<TabularResult>;
}

/// `StatsApi` over HTTP. One outbound call per `get_table`, no caching.
#[derive(Debug, Clone)]
pub struct HttpStatsApi {
    client: Client,
    base_url: String,
}

impl HttpStatsApi {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(config.headers.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl StatsApi for HttpStatsApi {
    async fn get_table(&self, endpoint: &str, params: &[(&str, String)]) -> Result<TabularResult> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, ?params, "requesting stats table");

        let res = self.client.get(&url).query(params).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(StatsError::UpstreamStatus {
                status: status.as_u16(),
                url: res.url().to_string(),
            });
        }

        let bytes = res.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        let table = TabularResult::from_response(endpoint, &body)?;

        debug!(endpoint, rows = table.rows.len(), "decoded stats table");
        Ok(table)
    }
}

/// List players for `season`, either the current roster or everyone.
pub async fn fetch_roster(
    api: &dyn StatsApi,
    season: &Season,
    only_current: bool,
) -> Result<TabularResult> {
    let params = [
        ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ("Season", season.as_str().to_string()),
        (
            "IsOnlyCurrentSeason",
            if only_current { "1" } else { "0" }.to_string(),
        ),
    ];
    api.get_table(COMMON_ALL_PLAYERS, &params).await
}

/// Per-game career lines for one player.
pub async fn fetch_career_stats(api: &dyn StatsApi, person_id: PersonId) -> Result<TabularResult> {
    let params = [
        ("PerMode", "PerGame".to_string()),
        ("PlayerID", person_id.to_string()),
    ];
    api.get_table(PLAYER_CAREER_STATS, &params).await
}
