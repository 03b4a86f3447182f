//! Static player directory: a pre-indexed alternative to live roster scans.
//!
//! The file follows the shape of the league's published `players.json`:
//!
//! ```json
//! {"league": {"standard": [{"firstName": "LeBron", "lastName": "James", "personId": "2544"}]}}
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{
    cli::types::{PersonId, Season},
    error::{Result, StatsError},
    nba::{
        resolver::{find_by_substring, validate_name, PlayerResolver},
        types::PlayerRecord,
    },
};


/// Path: <data_dir>/nba-fantasy/players.json
pub fn default_directory_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("nba-fantasy").join("players.json")
}

#[derive(Debug, Deserialize)]
struct DirectoryFile {
    league: DirectoryLeague,
}

#[derive(Debug, Deserialize)]
struct DirectoryLeague {
    #[serde(default)]
    standard: Vec<DirectoryEntry>,
}

#[derive(Debug, Deserialize)]
struct DirectoryEntry {
    #[serde(rename = "firstName", default)]
    first_name: String,
    #[serde(rename = "lastName", default)]
    last_name: String,
    #[serde(rename = "personId")]
    person_id: Value,
}

/// Lowercase and collapse internal whitespace.
fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Players indexed by normalized full name, in file order.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: Vec<PlayerRecord>,
    by_name: HashMap<String, usize>,
}

impl PlayerDirectory {
    /// Build an index. On duplicate names the first entry wins.
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        let mut by_name = HashMap::new();
        for (idx, p) in players.iter().enumerate() {
            by_name.entry(normalize(&p.display_name)).or_insert(idx);
        }
        Self { players, by_name }
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let file: DirectoryFile = serde_json::from_str(s)?;
        let players = file
            .league
            .standard
            .into_iter()
            .map(|e| {
                let person_id = PersonId::from_value(&e.person_id).ok_or_else(|| {
                    StatsError::InvalidConfig {
                        message: format!("directory entry has invalid personId {}", e.person_id),
                    }
                })?;
                let display_name = format!("{} {}", e.first_name.trim(), e.last_name.trim());
                Ok(PlayerRecord::new(display_name.trim(), person_id))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(players))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let directory = Self::from_json(&contents)?;
        info!(path = %path.display(), players = directory.len(), "loaded player directory");
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Exact full-name match first, then the first substring match.
    pub fn lookup(&self, name: &str) -> Option<&PlayerRecord> {
        self.by_name
            .get(&normalize(name))
            .and_then(|idx| self.players.get(*idx))
            .or_else(|| find_by_substring(&self.players, name))
    }
}

/// `PlayerResolver` backed by a [`PlayerDirectory`]. Makes no network calls
/// and does not depend on the season.
pub struct DirectoryResolver {
    directory: PlayerDirectory,
}

impl DirectoryResolver {
    pub fn new(directory: PlayerDirectory) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl PlayerResolver for DirectoryResolver {
    async fn resolve(&self, name: &str, _season: &Season) -> Result<PlayerRecord> {
        let name = validate_name(name)?;
        let player = self
            .directory
            .lookup(name)
            .cloned()
            .ok_or_else(|| StatsError::PlayerNotFound {
                name: name.to_string(),
            })?;
        debug!(%name, person_id = %player.person_id, "matched player directory");
        Ok(player)
    }

    fn strategy(&self) -> &'static str {
        "directory"
    }
}
