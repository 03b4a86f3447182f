//! Season identifiers as typed by users and as stored upstream.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season used when a request does not name one.
pub const DEFAULT_SEASON: &str = "2023-24";

/// Type-safe wrapper for a season identifier in `"YYYY-YY"` form.
///
/// The string is passed through to the upstream service untouched, so
/// only blank input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(String);

impl Season {
    pub fn new(season: impl Into<String>) -> Self {
        Self(season.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse an optional request value, falling back to the default season
    /// when it is absent or blank.
    pub fn or_default(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// Two-digit key of the starting year: `"2023-24"` gives `"23"`.
    ///
    /// Returns `None` when the part before the first `-` has fewer than
    /// two characters.
    pub fn year_key(&self) -> Option<&str> {
        year_key(&self.0)
    }
}

/// Two-digit starting-year key of any season-shaped string.
pub fn year_key(season: &str) -> Option<&str> {
    let start = season.split('-').next()?;
    let (boundary, _) = start.char_indices().rev().nth(1)?;
    Some(&start[boundary..])
}

impl Default for Season {
    fn default() -> Self {
        Self(DEFAULT_SEASON.to_string())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StatsError::InvalidConfig {
                message: "season must not be empty".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}
