//! Unit tests for configuration resolution

use super::*;
use std::path::Path;

#[cfg(test)]
mod origin_tests {
    use super::*;

    #[test]
    fn test_normalize_origin_strips_trailing_slash() {
        assert_eq!(
            normalize_origin("http://localhost:5173/").unwrap(),
            "http://localhost:5173"
        );
    }

    #[test]
    fn test_normalize_origin_default_port_dropped() {
        assert_eq!(
            normalize_origin("https://fantasy.example.com:443").unwrap(),
            "https://fantasy.example.com"
        );
    }

    #[test]
    fn test_normalize_origin_rejects_non_http() {
        assert!(matches!(
            normalize_origin("ftp://example.com"),
            Err(StatsError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_normalize_origin_rejects_garbage() {
        assert!(normalize_origin("localhost").is_err());
        assert!(normalize_origin("").is_err());
    }

    #[test]
    fn test_normalize_origin_rejects_path() {
        assert!(normalize_origin("http://localhost:5173/app").is_err());
    }

    #[test]
    fn test_explicit_origin_wins() {
        let origin = resolve_allowed_origin(Some("http://127.0.0.1:3000".to_string())).unwrap();
        assert_eq!(origin, "http://127.0.0.1:3000");
    }

    #[test]
    fn test_origin_from_env_then_default() {
        std::env::set_var(ALLOWED_ORIGIN_ENV_VAR, "https://stats.example.org");
        assert_eq!(
            resolve_allowed_origin(None).unwrap(),
            "https://stats.example.org"
        );

        std::env::remove_var(ALLOWED_ORIGIN_ENV_VAR);
        assert_eq!(resolve_allowed_origin(None).unwrap(), DEFAULT_ALLOWED_ORIGIN);
    }
}

#[cfg(test)]
mod server_config_tests {
    use super::*;

    #[test]
    fn test_server_config_parses_bind() {
        let config =
            ServerConfig::new(DEFAULT_BIND, Some("http://localhost:5173".to_string())).unwrap();
        assert_eq!(config.bind.port(), 5000);
        assert_eq!(config.allowed_origin, "http://localhost:5173");
    }

    #[test]
    fn test_server_config_rejects_bad_bind() {
        let err = ServerConfig::new("localhost", Some("http://localhost:5173".to_string()))
            .unwrap_err();
        match err {
            StatsError::InvalidConfig { message } => assert!(message.contains("bind")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod pipeline_config_tests {
    use super::*;

    fn args() -> PipelineArgs {
        PipelineArgs {
            resolver: ResolverKind::Directory,
            directory: Some(PathBuf::from("/tmp/players.json")),
            season_policy: SeasonPolicy::Substring,
            base_url: Some("http://127.0.0.1:8080/stats".to_string()),
            timeout_secs: 3,
            verbose: false,
        }
    }

    #[test]
    fn test_from_args() {
        let config = PipelineConfig::from_args(&args());

        assert_eq!(config.resolver, ResolverKind::Directory);
        assert_eq!(config.policy, SeasonPolicy::Substring);
        assert_eq!(config.directory, Path::new("/tmp/players.json"));
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:8080/stats");
        assert_eq!(config.upstream.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_base_url_from_env() {
        std::env::set_var(BASE_URL_ENV_VAR, "http://mirror.local/stats");
        assert_eq!(
            resolve_base_url(None).as_deref(),
            Some("http://mirror.local/stats")
        );
        std::env::remove_var(BASE_URL_ENV_VAR);
        assert_eq!(resolve_base_url(None), None);
    }

    #[test]
    fn test_blank_base_url_ignored() {
        assert_eq!(resolve_base_url(Some("  ".to_string())), None);
    }

    #[test]
    fn test_directory_from_env_then_default() {
        std::env::set_var(DIRECTORY_ENV_VAR, "/srv/nba/players.json");
        assert_eq!(resolve_directory(None), PathBuf::from("/srv/nba/players.json"));

        std::env::remove_var(DIRECTORY_ENV_VAR);
        assert_eq!(resolve_directory(None), default_directory_path());
    }

    #[test]
    fn test_default_pipeline_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.resolver, ResolverKind::Roster);
        assert_eq!(config.policy, SeasonPolicy::Suffix);
    }
}
