use cumulus_lib::application::config::AppConfig;
use cumulus_lib::primitives::{ConfigError, LogFormat, LogLevel, LogOutput};
use std::path::PathBuf;

fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert_eq!(config.stage, "dev");
    assert_eq!(config.log_output, LogOutput::Stderr);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig {
        profile: Some("base".to_string()),
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Pretty,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.log_format, LogFormat::Pretty);

    // Default values never clobber what the base already had
    assert_eq!(merged.profile.as_deref(), Some("base"));
    assert_eq!(merged.stage, "dev");
}

#[test]
fn test_environment_drives_logger_config() {
    let config = AppConfig::from_env_pairs(pairs(&[
        ("CUMULUS_PROJECT_DIR", "/srv/app"),
        ("CUMULUS_LOG_LEVEL", "1"),
        ("CUMULUS_LOG_OUTPUT", "stdout"),
        ("CUMULUS_DEBUG", "true"),
    ]))
    .unwrap();

    assert_eq!(config.project_dir, Some(PathBuf::from("/srv/app")));

    let logger_config = config.to_logger_config(false);
    assert_eq!(logger_config.level, LogLevel::Debug);
    assert_eq!(logger_config.output, LogOutput::Stdout);
    assert!(!logger_config.ansi);
}

#[test]
fn test_unknown_log_format_is_rejected() {
    let result = AppConfig::from_env_pairs(pairs(&[("CUMULUS_LOG_FORMAT", "yaml")]));
    assert!(matches!(
        result,
        Err(ConfigError::EnvironmentParsingFailed { .. })
    ));
}

#[test]
fn test_log_format_parses_aliases() {
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert!(matches!(
        "yaml".parse::<LogFormat>(),
        Err(ConfigError::ParseError { .. })
    ));
}
