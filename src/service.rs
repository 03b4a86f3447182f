//! Request pipeline: Player Resolver, then Career Stats Selector.

use std::sync::Arc;
use tracing::info;

use crate::{
    cli::types::{ResolverKind, Season},
    config::PipelineConfig,
    error::Result,
    nba::{
        directory::{DirectoryResolver, PlayerDirectory},
        http::{HttpStatsApi, StatsApi},
        resolver::{validate_name, PlayerResolver, RosterResolver},
        selector::CareerStatsSelector,
        types::StatsResponse,
    },
};

#[cfg(test)]
mod tests;

/// Immutable per-process pipeline. Requests share it behind an `Arc` and
/// keep all of their state on the stack.
pub struct StatsService {
    resolver: Box<dyn PlayerResolver>,
    selector: CareerStatsSelector,
}

impl StatsService {
    pub fn new(resolver: Box<dyn PlayerResolver>, selector: CareerStatsSelector) -> Self {
        Self { resolver, selector }
    }

    /// Wire the configured strategy against the live stats service.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let api: Arc<dyn StatsApi> = Arc::new(HttpStatsApi::new(&config.upstream)?);
        Self::with_api(api, config)
    }

    /// Wire the configured strategy against any `StatsApi`.
    pub fn with_api(api: Arc<dyn StatsApi>, config: &PipelineConfig) -> Result<Self> {
        let resolver: Box<dyn PlayerResolver> = match config.resolver {
            ResolverKind::Roster => Box::new(RosterResolver::new(api.clone())),
            ResolverKind::Directory => Box::new(DirectoryResolver::new(PlayerDirectory::load(
                &config.directory,
            )?)),
        };

        info!(
            resolver = resolver.strategy(),
            season_policy = %config.policy,
            "stats pipeline ready"
        );
        Ok(Self::new(
            resolver,
            CareerStatsSelector::new(api, config.policy),
        ))
    }

    pub async fn player_stats(&self, name: &str, season: &Season) -> Result<StatsResponse> {
        let name = validate_name(name)?;
        info!(%name, %season, "fetching NBA stats");

        let player = self.resolver.resolve(name, season).await?;
        self.selector.stats_for(&player, season).await
    }
}
