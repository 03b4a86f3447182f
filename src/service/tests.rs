//! Unit tests for the request pipeline

use super::*;
use crate::{
    cli::types::SeasonPolicy,
    error::StatsError,
    nba::{
        http::{COMMON_ALL_PLAYERS, PLAYER_CAREER_STATS},
        testing::{season_line, FakeStatsApi},
    },
};
use serde_json::json;
use std::io::Write;

fn lebron_api() -> FakeStatsApi {
    FakeStatsApi::new()
        .with_current_roster(&[("Stephen Curry", 201939), ("LeBron James", 2544)])
        .with_historical_roster(&[("Michael Jordan", 893), ("LeBron James", 2544)])
        .with_career(
            2544,
            vec![
                season_line(
                    "2022-23",
                    "LAL",
                    [json!(28.9), json!(8.3), json!(6.8), json!(0.9), json!(0.6), json!(3.2)],
                ),
                season_line(
                    "2023-24",
                    "LAL",
                    [json!(25.7), json!(7.3), json!(8.3), json!(1.3), json!(0.5), json!(3.5)],
                ),
            ],
        )
        .with_career(
            893,
            vec![season_line(
                "1995-96",
                "CHI",
                [json!(30.4), json!(6.6), json!(4.3), json!(2.2), json!(0.5), json!(2.4)],
            )],
        )
}

fn roster_config() -> PipelineConfig {
    PipelineConfig::default()
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[tokio::test]
    async fn test_end_to_end_lebron() {
        let api = Arc::new(lebron_api());
        let service = StatsService::with_api(api.clone(), &roster_config()).unwrap();

        let response = service
            .player_stats("LeBron", &Season::new("2023-24"))
            .await
            .unwrap();

        assert_eq!(response.player, "LeBron James");
        assert_eq!(response.team, "LAL");
        assert_eq!(response.fantasy_score, 48.81);
        assert_eq!(api.calls_to(COMMON_ALL_PLAYERS).len(), 1);
        assert_eq!(api.calls_to(PLAYER_CAREER_STATS).len(), 1);
    }

    #[tokio::test]
    async fn test_historical_player_uses_three_calls() {
        let api = Arc::new(lebron_api());
        let service = StatsService::with_api(api.clone(), &roster_config()).unwrap();

        let response = service
            .player_stats("jordan", &Season::new("1995-96"))
            .await
            .unwrap();

        assert_eq!(response.player, "Michael Jordan");
        assert_eq!(response.team, "CHI");
        assert_eq!(api.call_count(), 3);
    }

    #[tokio::test]
    async fn test_blank_name_makes_no_upstream_calls() {
        let api = Arc::new(lebron_api());
        let service = StatsService::with_api(api.clone(), &roster_config()).unwrap();

        let err = service
            .player_stats(" \t ", &Season::default())
            .await
            .unwrap_err();

        assert!(matches!(err, StatsError::InvalidInput));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_player() {
        let api = Arc::new(lebron_api());
        let service = StatsService::with_api(api.clone(), &roster_config()).unwrap();

        let err = service
            .player_stats("Wembanyama", &Season::default())
            .await
            .unwrap_err();

        assert!(matches!(err, StatsError::PlayerNotFound { .. }));
        assert_eq!(api.calls_to(PLAYER_CAREER_STATS).len(), 0);
    }

    #[tokio::test]
    async fn test_season_without_stats() {
        let api = Arc::new(lebron_api());
        let service = StatsService::with_api(api, &roster_config()).unwrap();

        let err = service
            .player_stats("LeBron", &Season::new("2030-31"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_idempotent_responses() {
        let api = Arc::new(lebron_api());
        let service = StatsService::with_api(api, &roster_config()).unwrap();

        let first = service.player_stats("LeBron", &Season::default()).await.unwrap();
        let second = service.player_stats("LeBron", &Season::default()).await.unwrap();

        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_substring_policy_wired_through() {
        let api = Arc::new(lebron_api());
        let config = PipelineConfig {
            policy: SeasonPolicy::Substring,
            ..PipelineConfig::default()
        };
        let service = StatsService::with_api(api, &config).unwrap();

        // a bare start year is still contained in "2023-24"
        let response = service.player_stats("LeBron", &Season::new("2023")).await.unwrap();
        assert_eq!(response.season, "2023");
        assert_eq!(response.fantasy_score, 48.81);
    }
}

#[cfg(test)]
mod directory_strategy_tests {
    use super::*;

    #[tokio::test]
    async fn test_directory_strategy_skips_roster_calls() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"league": {{"standard": [{{"firstName": "LeBron", "lastName": "James", "personId": "2544"}}]}}}}"#
        )
        .unwrap();

        let config = PipelineConfig {
            resolver: ResolverKind::Directory,
            directory: file.path().to_path_buf(),
            ..PipelineConfig::default()
        };
        let api = Arc::new(lebron_api());
        let service = StatsService::with_api(api.clone(), &config).unwrap();

        let response = service
            .player_stats("lebron james", &Season::default())
            .await
            .unwrap();

        assert_eq!(response.fantasy_score, 48.81);
        assert_eq!(api.calls_to(COMMON_ALL_PLAYERS).len(), 0);
        assert_eq!(api.calls_to(PLAYER_CAREER_STATS).len(), 1);
    }

    #[test]
    fn test_directory_strategy_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig {
            resolver: ResolverKind::Directory,
            directory: dir.path().join("missing.json"),
            ..PipelineConfig::default()
        };

        let result = StatsService::with_api(Arc::new(FakeStatsApi::new()), &config);
        assert!(matches!(result, Err(StatsError::Io(_))));
    }
}
