use crate::cli::types::{PersonId, Season};
use crate::error::{Result, StatsError};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;


/// Roster column holding the player's display name.
pub const DISPLAY_NAME_COLUMN: &str = "DISPLAY_FIRST_LAST";
/// Roster column holding the stable player identifier.
pub const PERSON_ID_COLUMN: &str = "PERSON_ID";

pub const SEASON_ID_COLUMN: &str = "SEASON_ID";
pub const TEAM_COLUMN: &str = "TEAM_ABBREVIATION";

/// Team shown when the stats row carries none.
pub const TEAM_FALLBACK: &str = "N/A";

/// One result set from the stats service: column names plus positional rows.
///
/// Every row has exactly `headers.len()` values.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl TabularResult {
    /// Build a table, rejecting rows whose width differs from the header count.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(StatsError::MalformedTable {
                message: format!(
                    "row {} has {} values, expected {}",
                    idx,
                    row.len(),
                    headers.len()
                ),
            });
        }
        Ok(Self { headers, rows })
    }

    /// Pull `resultSets[0].headers` and `resultSets[0].rowSet` out of a raw payload.
    pub fn from_response(endpoint: &str, body: &Value) -> Result<Self> {
        let missing = || StatsError::MissingResultSet {
            endpoint: endpoint.to_string(),
        };

        let set = body
            .get("resultSets")
            .and_then(|v| v.as_array())
            .and_then(|sets| sets.first())
            .ok_or_else(missing)?;

        let headers = set
            .get("headers")
            .and_then(|v| v.as_array())
            .ok_or_else(missing)?
            .iter()
            .map(|h| {
                h.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| StatsError::MalformedTable {
                        message: format!("non-string header {} from {}", h, endpoint),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let rows = set
            .get("rowSet")
            .and_then(|v| v.as_array())
            .ok_or_else(missing)?
            .iter()
            .map(|row| {
                row.as_array()
                    .cloned()
                    .ok_or_else(|| StatsError::MalformedTable {
                        message: format!("non-array row from {}", endpoint),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(headers, rows)
    }

    /// Zip each row with the headers, preserving column order.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fail unless every column in `columns` is present in the headers.
    pub fn require_columns(&self, columns: &[&str]) -> Result<()> {
        match columns
            .iter()
            .find(|c| !self.headers.iter().any(|h| h == *c))
        {
            Some(column) => Err(missing_column(column)),
            None => Ok(()),
        }
    }

    /// Records that `parse` accepts, in row order. Rejected rows are logged
    /// and skipped.
    fn readable_records<'a, T, F>(&'a self, parse: F) -> impl Iterator<Item = T> + 'a
    where
        T: 'a,
        F: Fn(&Map<String, Value>) -> Result<T> + 'a,
    {
        self.rows.iter().enumerate().filter_map(move |(idx, row)| {
            let record: Map<String, Value> = self
                .headers
                .iter()
                .cloned()
                .zip(row.iter().cloned())
                .collect();
            match parse(&record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(row = idx, error = %e, "skipping unreadable row");
                    None
                }
            }
        })
    }
}

/// A player as returned by a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub display_name: String,
    pub person_id: PersonId,
}

impl PlayerRecord {
    pub fn new(display_name: impl Into<String>, person_id: PersonId) -> Self {
        Self {
            display_name: display_name.into(),
            person_id,
        }
    }

    /// Read a roster record. Both columns are required.
    pub fn from_record(record: &Map<String, Value>) -> Result<Self> {
        let display_name = record
            .get(DISPLAY_NAME_COLUMN)
            .and_then(|v| v.as_str())
            .ok_or_else(|| missing_column(DISPLAY_NAME_COLUMN))?;
        let person_id = record
            .get(PERSON_ID_COLUMN)
            .and_then(PersonId::from_value)
            .ok_or_else(|| missing_column(PERSON_ID_COLUMN))?;

        Ok(Self::new(display_name, person_id))
    }

    /// Readable players of a roster table, in row order. The table must carry
    /// both roster columns; individual bad rows are skipped.
    pub fn iter_table(table: &TabularResult) -> Result<impl Iterator<Item = Self> + '_> {
        table.require_columns(&[DISPLAY_NAME_COLUMN, PERSON_ID_COLUMN])?;
        Ok(table.readable_records(Self::from_record))
    }

    pub fn from_table(table: &TabularResult) -> Result<Vec<Self>> {
        Ok(Self::iter_table(table)?.collect())
    }
}

/// One season line of a player's career per-game statistics.
///
/// Stat fields keep the upstream value as-is (`null` when absent) so the
/// response can echo them without coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonStatRow {
    pub season_id: String,
    pub team_abbreviation: Option<Value>,
    pub points: Value,
    pub rebounds: Value,
    pub assists: Value,
    pub steals: Value,
    pub blocks: Value,
    pub turnovers: Value,
}

impl SeasonStatRow {
    pub fn from_record(record: &Map<String, Value>) -> Result<Self> {
        let season_id = match record.get(SEASON_ID_COLUMN) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(missing_column(SEASON_ID_COLUMN)),
        };
        let raw = |key: &str| record.get(key).cloned().unwrap_or(Value::Null);

        Ok(Self {
            season_id,
            team_abbreviation: record.get(TEAM_COLUMN).cloned(),
            points: raw("PTS"),
            rebounds: raw("REB"),
            assists: raw("AST"),
            steals: raw("STL"),
            blocks: raw("BLK"),
            turnovers: raw("TOV"),
        })
    }

    /// Readable season lines, in career order. Rows without a season id are
    /// skipped.
    pub fn from_table(table: &TabularResult) -> Result<Vec<Self>> {
        table.require_columns(&[SEASON_ID_COLUMN])?;
        Ok(table.readable_records(Self::from_record).collect())
    }

    /// Team for display; `"N/A"` when the column is absent or null.
    pub fn team(&self) -> String {
        match &self.team_abbreviation {
            None | Some(Value::Null) => TEAM_FALLBACK.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Final per-request payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResponse {
    pub player: String,
    pub team: String,
    pub season: String,
    pub points: Value,
    pub rebounds: Value,
    pub assists: Value,
    pub steals: Value,
    pub blocks: Value,
    pub turnovers: Value,
    pub fantasy_score: f64,
}

impl StatsResponse {
    pub fn assemble(
        player: &PlayerRecord,
        season: &Season,
        row: &SeasonStatRow,
        fantasy_score: f64,
    ) -> Self {
        Self {
            player: player.display_name.clone(),
            team: row.team(),
            season: season.as_str().to_string(),
            points: row.points.clone(),
            rebounds: row.rebounds.clone(),
            assists: row.assists.clone(),
            steals: row.steals.clone(),
            blocks: row.blocks.clone(),
            turnovers: row.turnovers.clone(),
            fantasy_score,
        }
    }
}

fn missing_column(column: &str) -> StatsError {
    StatsError::MalformedTable {
        message: format!("missing or invalid {} column", column),
    }
}
