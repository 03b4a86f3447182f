use std::sync::Arc;
use tracing::debug;

use crate::{
    cli::types::{season::year_key, Season, SeasonPolicy},
    error::{Result, StatsError},
    nba::{
        compute::fantasy_score,
        http::{fetch_career_stats, StatsApi},
        types::{PlayerRecord, SeasonStatRow, StatsResponse},
    },
};


/// Whether a stored `SEASON_ID` satisfies the requested season.
///
/// Under `Suffix`, both ids are reduced to their two-digit starting year
/// (request `"2023-24"` and stored `"1923-24"` both give `"23"`), so
/// `"2013-14"` never matches a `"2023-24"` request. This compares start
/// years; a literal `ends_with` on the stored id would pick `"2022-23"`.
/// Under `Substring` the requested string must appear verbatim in the
/// stored id.
pub fn season_matches(season_id: &str, season: &Season, policy: SeasonPolicy) -> bool {
    match policy {
        SeasonPolicy::Suffix => match (season.year_key(), year_key(season_id)) {
            (Some(want), Some(have)) => want == have,
            _ => false,
        },
        SeasonPolicy::Substring => season_id.contains(season.as_str()),
    }
}

/// First row, in career order, matching the season.
pub fn select_season_row<'a>(
    rows: &'a [SeasonStatRow],
    season: &Season,
    policy: SeasonPolicy,
) -> Option<&'a SeasonStatRow> {
    rows.iter()
        .find(|row| season_matches(&row.season_id, season, policy))
}

/// Fetches career per-game lines and turns the matching season into a response.
pub struct CareerStatsSelector {
    api: Arc<dyn StatsApi>,
    policy: SeasonPolicy,
}

impl CareerStatsSelector {
    pub fn new(api: Arc<dyn StatsApi>, policy: SeasonPolicy) -> Self {
        Self { api, policy }
    }

    pub fn policy(&self) -> SeasonPolicy {
        self.policy
    }

    pub async fn stats_for(&self, player: &PlayerRecord, season: &Season) -> Result<StatsResponse> {
        let table = fetch_career_stats(self.api.as_ref(), player.person_id).await?;
        let rows = SeasonStatRow::from_table(&table)?;

        let row = select_season_row(&rows, season, self.policy).ok_or_else(|| {
            StatsError::StatsNotFound {
                name: player.display_name.clone(),
                season: season.to_string(),
            }
        })?;

        let score = fantasy_score(row);
        debug!(
            player = %player.display_name,
            season_id = %row.season_id,
            fantasy_score = score,
            "selected season line"
        );

        Ok(StatsResponse::assemble(player, season, row, score))
    }
}
