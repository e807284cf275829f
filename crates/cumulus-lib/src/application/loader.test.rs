use super::*;
use crate::primitives::{LogFormat, LogLevel};
use std::path::PathBuf;

fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_config_loading_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.stage, "dev");
    assert!(!config.debug);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
}

#[test]
fn test_config_merging() {
    let base = AppConfig::default();
    let override_config = AppConfig {
        log_level: 4,
        stage: "prod".to_string(),
        profile: Some("ops".to_string()),
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.log_level, 4);
    assert_eq!(merged.stage, "prod");
    assert_eq!(merged.profile.as_deref(), Some("ops"));
    assert_eq!(merged.log_format, LogFormat::Text);
}

#[test]
fn test_prefixed_environment_overrides() {
    let config = AppConfig::from_env_pairs(pairs(&[
        ("CUMULUS_PROJECT_DIR", "/srv/orders"),
        ("CUMULUS_STAGE", "prod"),
        ("CUMULUS_PROFILE", "ops"),
        ("CUMULUS_DEBUG", "true"),
        ("CUMULUS_LOG_LEVEL", "2"),
        ("CUMULUS_LOG_FORMAT", "json"),
        ("UNRELATED", "ignored"),
    ]))
    .unwrap();

    assert_eq!(config.project_dir, Some(PathBuf::from("/srv/orders")));
    assert_eq!(config.stage, "prod");
    assert_eq!(config.profile.as_deref(), Some("ops"));
    assert!(config.debug);
    assert_eq!(config.log_level, 2);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_validate_fills_project_dir() {
    let config = AppConfig::from_env_pairs(Vec::new()).unwrap();
    assert!(config.project_dir.is_some());
}

#[test]
fn test_empty_stage_is_rejected() {
    let err = AppConfig::from_env_pairs(pairs(&[("CUMULUS_STAGE", " ")])).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_invalid_log_level_is_a_parse_failure() {
    let err = AppConfig::from_env_pairs(pairs(&[("CUMULUS_LOG_LEVEL", "loud")])).unwrap_err();
    assert!(matches!(err, ConfigError::EnvironmentParsingFailed { .. }));
}

#[test]
fn test_debug_promotes_log_level() {
    let config = AppConfig {
        debug: true,
        ..AppConfig::default()
    };
    assert_eq!(config.to_logger_config(false).level, LogLevel::Debug);

    let trace = AppConfig {
        debug: true,
        log_level: 4,
        ..AppConfig::default()
    };
    assert_eq!(trace.to_logger_config(true).level, LogLevel::Trace);
    assert!(trace.to_logger_config(true).ansi);
}
