use super::*;

fn env_of(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_pairs(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .unwrap()
}

#[test]
fn test_tty_default_without_overrides() {
    let env_config = env_of(&[]);
    assert!(env_config.ansi_enabled(true));
    assert!(!env_config.ansi_enabled(false));
}

#[test]
fn test_no_color_environment_variable() {
    let env_config = env_of(&[("NO_COLOR", "1")]);
    assert!(!env_config.ansi_enabled(true));
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env_config = env_of(&[("NO_COLOR", "")]);
    assert!(env_config.ansi_enabled(true));
}

#[test]
fn test_force_color_environment_variable() {
    let env_config = env_of(&[("FORCE_COLOR", "1")]);
    assert!(env_config.ansi_enabled(false));
}

#[test]
fn test_environment_variable_precedence() {
    let env_config = env_of(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);

    // FORCE_COLOR=1 wins over NO_COLOR and CLICOLOR
    assert!(env_config.ansi_enabled(false));
}

#[test]
fn test_ci_environment_variable() {
    let env_config = env_of(&[("CI", "true"), ("FORCE_COLOR", "1")]);
    assert!(!env_config.ansi_enabled(true));
}
