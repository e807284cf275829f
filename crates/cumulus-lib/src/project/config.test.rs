use super::*;
use serde_json::json;

fn raw(value: Value) -> RawProjectConfig {
    match value {
        Value::Object(map) => RawProjectConfig::new(map),
        other => panic!("test config must be an object, got {other}"),
    }
}

fn app() -> Arc<ApplicationModule> {
    Arc::new(ApplicationModule::new("testapp"))
}

fn resolved(stage: &str, user: UserProvidedParams, disk: Value) -> ResolvedConfig {
    ResolvedConfig::new(
        stage,
        user,
        raw(disk),
        DefaultParams::new(PathBuf::from("/projects/testapp")),
    )
}

#[test]
fn test_version_gate() {
    let cases = [
        (json!({"version": "2.0"}), true),
        (json!({"version": "1.0"}), true),
        (json!({"version": 2}), true),
        (json!({"version": " 1.5 "}), true),
        (json!({}), true),
        (json!({"version": "2.1"}), false),
        (json!({"version": "3.0"}), false),
        (json!({"version": "abc"}), false),
        (json!({"version": "NaN"}), false),
        (json!({"version": ""}), false),
        (json!({"version": true}), false),
    ];

    for (disk, ok) in cases {
        let result = validate_version(&raw(disk.clone()));
        assert_eq!(result.is_ok(), ok, "unexpected outcome for {disk}");
    }
}

#[test]
fn test_unknown_version_carries_literal() {
    let err = validate_version(&raw(json!({"version": "3.0"}))).unwrap_err();
    match err {
        FactoryError::UnknownConfigVersion { version } => assert_eq!(version, "3.0"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_version_defaults_to_one() {
    assert_eq!(raw(json!({})).version_literal(), "1.0");
    assert_eq!(raw(json!({"version": 2.0})).version_literal(), "2.0");
}

#[test]
fn test_explicit_override_beats_disk() {
    let mut user = UserProvidedParams::new(app());
    user.autogen_policy = Some(true);

    let config = resolved("dev", user, json!({"autogen_policy": false}));

    assert!(config.autogen_policy());
}

#[test]
fn test_disk_beats_default_without_override() {
    let config = resolved(
        "dev",
        UserProvidedParams::new(app()),
        json!({"autogen_policy": false}),
    );

    assert!(!config.autogen_policy());
}

#[test]
fn test_default_applies_when_no_layer_sets_value() {
    let config = resolved("dev", UserProvidedParams::new(app()), json!({}));

    assert!(config.autogen_policy());
    assert_eq!(config.api_gateway_stage(), "api");
    assert_eq!(config.project_dir(), Path::new("/projects/testapp"));
    assert!(config.manage_iam_role());
    assert_eq!(config.profile(), None);
}

#[test]
fn test_stage_value_beats_top_level() {
    let disk = json!({
        "api_gateway_stage": "v1",
        "lambda_timeout": 60,
        "stages": {
            "prod": {"api_gateway_stage": "prod-api", "lambda_timeout": 300}
        }
    });

    let prod = resolved("prod", UserProvidedParams::new(app()), disk.clone());
    let dev = resolved("dev", UserProvidedParams::new(app()), disk);

    assert_eq!(prod.api_gateway_stage(), "prod-api");
    assert_eq!(prod.lambda_timeout(), Some(300));
    assert_eq!(dev.api_gateway_stage(), "v1");
    assert_eq!(dev.lambda_timeout(), Some(60));
}

#[test]
fn test_user_api_stage_beats_stage_scoped_disk_value() {
    let mut user = UserProvidedParams::new(app());
    user.api_gateway_stage = Some("canary".to_string());

    let config = resolved(
        "prod",
        user,
        json!({"stages": {"prod": {"api_gateway_stage": "prod-api"}}}),
    );

    assert_eq!(config.api_gateway_stage(), "canary");
}

#[test]
fn test_malformed_stage_value_falls_back_to_top_level() {
    let config = resolved(
        "dev",
        UserProvidedParams::new(app()),
        json!({
            "lambda_memory_size": 256,
            "stages": {"dev": {"lambda_memory_size": "lots"}}
        }),
    );

    assert_eq!(config.lambda_memory_size(), Some(256));
}

#[test]
fn test_environment_variables_merge_per_key() {
    let config = resolved(
        "prod",
        UserProvidedParams::new(app()),
        json!({
            "environment_variables": {"LOG_LEVEL": "debug", "REGION_HINT": "eu"},
            "stages": {"prod": {"environment_variables": {"LOG_LEVEL": "warn"}}}
        }),
    );

    let env = config.environment_variables();
    assert_eq!(env.get("LOG_LEVEL").map(String::as_str), Some("warn"));
    assert_eq!(env.get("REGION_HINT").map(String::as_str), Some("eu"));
}

#[test]
fn test_app_name_prefers_disk_then_app() {
    let named = resolved(
        "dev",
        UserProvidedParams::new(app()),
        json!({"app_name": "from-disk"}),
    );
    let unnamed = resolved("dev", UserProvidedParams::new(app()), json!({}));

    assert_eq!(named.app_name(), "from-disk");
    assert_eq!(unnamed.app_name(), "testapp");
}

#[test]
fn test_tool_tag_added_unless_user_defined() {
    let config = resolved(
        "prod",
        UserProvidedParams::new(app()),
        json!({"tags": {"team": "payments"}}),
    );
    let tags = config.tags();
    assert_eq!(tags.get("team").map(String::as_str), Some("payments"));
    let tool_tag = tags.get(TOOL_TAG_KEY).unwrap();
    assert!(tool_tag.starts_with("version="));
    assert!(tool_tag.ends_with(":stage=prod:app=testapp"));

    let overridden = resolved(
        "prod",
        UserProvidedParams::new(app()),
        json!({"tags": {"cumulus": "custom"}}),
    );
    assert_eq!(
        overridden.tags().get(TOOL_TAG_KEY).map(String::as_str),
        Some("custom")
    );
}

#[test]
fn test_iam_policy_file_defaults_per_stage() {
    let config = resolved("staging", UserProvidedParams::new(app()), json!({}));
    assert_eq!(config.iam_policy_file(), "policy-staging.json");
}

#[test]
fn test_from_json_rejects_non_object_root() {
    assert!(RawProjectConfig::from_json("[1, 2, 3]").is_err());
    assert!(RawProjectConfig::from_json("{\"version\": \"2.0\"}").is_ok());
}
