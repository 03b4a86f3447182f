//! Player resolution: free-text name to one `PlayerRecord`.
//!
//! Two strategies sit behind [`PlayerResolver`]:
//! - [`RosterResolver`] scans the live roster, current season first and the
//!   full historical roster second.
//! - [`DirectoryResolver`](crate::nba::directory::DirectoryResolver) looks
//!   players up in a local static directory.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    cli::types::Season,
    error::{Result, StatsError},
    nba::{
        http::{fetch_roster, StatsApi},
        types::PlayerRecord,
    },
};


#[async_trait]
pub trait PlayerResolver: Send + Sync {
    /// Resolve `name` to exactly one player, or `PlayerNotFound`.
    async fn resolve(&self, name: &str, season: &Season) -> Result<PlayerRecord>;

    /// Short label for logs.
    fn strategy(&self) -> &'static str;
}

/// Trim a requested name, rejecting blank input.
pub fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(StatsError::InvalidInput)
    } else {
        Ok(trimmed)
    }
}

/// First player, in source order, whose display name contains `query`
/// case-insensitively.
pub fn find_by_substring<'a>(players: &'a [PlayerRecord], query: &str) -> Option<&'a PlayerRecord> {
    let needle = query.to_lowercase();
    players.iter().find(|p| name_contains(p, &needle))
}

fn name_contains(player: &PlayerRecord, lowered_query: &str) -> bool {
    player.display_name.to_lowercase().contains(lowered_query)
}

/// Resolves against the live `commonallplayers` roster.
pub struct RosterResolver {
    api: Arc<dyn StatsApi>,
}

impl RosterResolver {
    pub fn new(api: Arc<dyn StatsApi>) -> Self {
        Self { api }
    }

    async fn scan(&self, name: &str, season: &Season, only_current: bool) -> Result<Option<PlayerRecord>> {
        let table = fetch_roster(self.api.as_ref(), season, only_current).await?;
        let needle = name.to_lowercase();
        let found = PlayerRecord::iter_table(&table)?.find(|p| name_contains(p, &needle));
        Ok(found)
    }
}

#[async_trait]
impl PlayerResolver for RosterResolver {
    async fn resolve(&self, name: &str, season: &Season) -> Result<PlayerRecord> {
        let name = validate_name(name)?;

        if let Some(player) = self.scan(name, season, true).await? {
            debug!(%name, person_id = %player.person_id, "matched current roster");
            return Ok(player);
        }

        info!(%name, %season, "not on current roster, retrying with historical roster");
        if let Some(player) = self.scan(name, season, false).await? {
            debug!(%name, person_id = %player.person_id, "matched historical roster");
            return Ok(player);
        }

        Err(StatsError::PlayerNotFound {
            name: name.to_string(),
        })
    }

    fn strategy(&self) -> &'static str {
        "roster"
    }
}
