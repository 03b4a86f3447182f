//! Identifier types for NBA stats entities.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

use crate::error::{Result, StatsError};

/// Type-safe wrapper for the stats service's stable player identifier.
///
/// The roster endpoint returns it as a JSON number, while the static
/// player directory stores it as a string. Both forms are accepted.
///
/// # Examples
///
/// ```rust
/// use nba_fantasy::PersonId;
/// use serde_json::json;
///
/// assert_eq!(PersonId::from_value(&json!(2544)), Some(PersonId::new(2544)));
/// assert_eq!(PersonId::from_value(&json!("2544")), Some(PersonId::new(2544)));
/// assert_eq!(PersonId::new(2544).to_string(), "2544");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub u64);

impl PersonId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Read an identifier out of a JSON number or numeric string.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
                .map(Self),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|e| StatsError::InvalidConfig {
                message: format!("invalid person id '{}': {}", s, e),
            })
    }
}
