//! In-memory `StatsApi` double for tests.
//!
//! Serves canned roster and career tables and records every call so tests
//! can assert on how many upstream requests a pipeline made.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{
    error::{Result, StatsError},
    nba::{
        http::{StatsApi, COMMON_ALL_PLAYERS, PLAYER_CAREER_STATS},
        types::TabularResult,
    },
};

pub const ROSTER_HEADERS: [&str; 4] = [
    "PERSON_ID",
    "DISPLAY_LAST_COMMA_FIRST",
    "DISPLAY_FIRST_LAST",
    "ROSTERSTATUS",
];

pub const CAREER_HEADERS: [&str; 10] = [
    "PLAYER_ID",
    "SEASON_ID",
    "TEAM_ABBREVIATION",
    "GP",
    "REB",
    "AST",
    "STL",
    "BLK",
    "TOV",
    "PTS",
];

/// One recorded upstream request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub params: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Build a roster table from `(display name, person id)` pairs.
pub fn roster_table(players: &[(&str, u64)]) -> TabularResult {
    let rows = players
        .iter()
        .map(|(name, id)| vec![json!(id), json!(name), json!(name), json!(1)])
        .collect();
    TabularResult {
        headers: ROSTER_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}

/// One per-game career line in `CAREER_HEADERS` order.
pub fn season_line(season_id: &str, team: &str, stats: [Value; 6]) -> Vec<Value> {
    let [pts, reb, ast, stl, blk, tov] = stats;
    vec![
        json!(0),
        json!(season_id),
        json!(team),
        json!(71),
        reb,
        ast,
        stl,
        blk,
        tov,
        pts,
    ]
}

pub fn career_table(lines: Vec<Vec<Value>>) -> TabularResult {
    TabularResult {
        headers: CAREER_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows: lines,
    }
}

#[derive(Debug, Default)]
pub struct FakeStatsApi {
    current_roster: Option<TabularResult>,
    historical_roster: Option<TabularResult>,
    careers: HashMap<u64, TabularResult>,
    fail_status: Option<u16>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeStatsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_current_roster(mut self, players: &[(&str, u64)]) -> Self {
        self.current_roster = Some(roster_table(players));
        self
    }

    pub fn with_historical_roster(mut self, players: &[(&str, u64)]) -> Self {
        self.historical_roster = Some(roster_table(players));
        self
    }

    /// Serve a prebuilt current-roster table, bad rows included.
    pub fn with_current_roster_table(mut self, table: TabularResult) -> Self {
        self.current_roster = Some(table);
        self
    }

    pub fn with_historical_roster_table(mut self, table: TabularResult) -> Self {
        self.historical_roster = Some(table);
        self
    }

    pub fn with_career(mut self, person_id: u64, lines: Vec<Vec<Value>>) -> Self {
        self.careers.insert(person_id, career_table(lines));
        self
    }

    /// Answer every request with the given HTTP status.
    pub fn failing(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.endpoint == endpoint)
            .collect()
    }

    fn lookup(&self, endpoint: &str, params: &[(&str, String)]) -> Option<TabularResult> {
        let param = |key: &str| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };
        match endpoint {
            COMMON_ALL_PLAYERS => match param("IsOnlyCurrentSeason") {
                Some("1") => self.current_roster.clone(),
                _ => self.historical_roster.clone(),
            },
            PLAYER_CAREER_STATS => param("PlayerID")
                .and_then(|id| id.parse::<u64>().ok())
                .and_then(|id| self.careers.get(&id).cloned()),
            _ => None,
        }
    }
}

#[async_trait]
impl StatsApi for FakeStatsApi {
    async fn get_table(&self, endpoint: &str, params: &[(&str, String)]) -> Result<TabularResult> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                endpoint: endpoint.to_string(),
                params: params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            });
        }

        if let Some(status) = self.fail_status {
            return Err(StatsError::UpstreamStatus {
                status,
                url: format!("fake://{}", endpoint),
            });
        }

        // An unconfigured table behaves like an empty result set
        Ok(self.lookup(endpoint, params).unwrap_or_else(|| TabularResult {
            headers: match endpoint {
                PLAYER_CAREER_STATS => CAREER_HEADERS.iter().map(|h| h.to_string()).collect(),
                _ => ROSTER_HEADERS.iter().map(|h| h.to_string()).collect(),
            },
            rows: Vec::new(),
        }))
    }
}
