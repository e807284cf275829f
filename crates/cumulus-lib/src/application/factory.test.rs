use super::*;
use crate::application::providers_mocks::MockFileSystemProvider;
use crate::deploy::NoPrompt;
use crate::primitives::FactoryError;
use crate::project::config_file_path;

const APP_TOML: &str = r#"
[app]
name = "orders"

[[app.routes]]
path = "/orders"
handler = "list_orders"
"#;

fn project_dir() -> PathBuf {
    PathBuf::from("/projects/orders")
}

fn factory_for(config_json: &str) -> (Factory<MockFileSystemProvider>, MockFileSystemProvider) {
    let fs = MockFileSystemProvider::new().with_project(&project_dir(), config_json, APP_TOML);
    let factory = Factory::with_providers(project_dir(), false, None, fs.clone());
    (factory, fs)
}

#[test]
fn test_create_config_defaults_to_dev_stage() {
    let (mut factory, _) = factory_for(r#"{"version": "2.0", "app_name": "orders-api"}"#);

    let config = factory.create_config(None, None, None).unwrap();

    assert_eq!(config.stage(), "dev");
    assert_eq!(config.app_name(), "orders-api");
    assert_eq!(config.project_dir(), project_dir().as_path());
    assert_eq!(config.app().name, "orders");
    assert!(config.autogen_policy());
}

#[test]
fn test_explicit_arguments_win() {
    let (mut factory, _) = factory_for(
        r#"{"version": "2.0", "autogen_policy": true, "api_gateway_stage": "v1"}"#,
    );

    let config = factory
        .create_config(Some("prod"), Some(false), Some("edge"))
        .unwrap();

    assert_eq!(config.stage(), "prod");
    assert!(!config.autogen_policy());
    assert_eq!(config.api_gateway_stage(), "edge");
}

#[test]
fn test_profile_is_carried_into_config() {
    let fs = MockFileSystemProvider::new().with_project(&project_dir(), "{}", APP_TOML);
    let mut factory = Factory::with_providers(project_dir(), false, Some("ops".to_string()), fs);

    let config = factory.create_config(None, None, None).unwrap();

    assert_eq!(config.profile().as_deref(), Some("ops"));
    assert_eq!(config.config_version(), "1.0");
}

#[test]
fn test_unknown_version_is_rejected() {
    let (mut factory, _) = factory_for(r#"{"version": "3.0"}"#);

    let err = factory.create_config(None, None, None).unwrap_err();

    assert_eq!(err.to_string(), "Unknown version '3.0' in config.json");
}

#[test]
fn test_missing_project_config() {
    let fs = MockFileSystemProvider::new().with_directory(project_dir());
    let factory = Factory::with_providers(project_dir(), false, None, fs);

    let err = factory.load_project_config().unwrap_err();
    assert!(matches!(err, FactoryError::ConfigUnreadable { .. }));
}

#[test]
fn test_load_project_config_reads_raw_values() {
    let (factory, _) = factory_for(r#"{"version": "2.0", "stages": {"dev": {}}}"#);

    let raw = factory.load_project_config().unwrap();

    assert_eq!(raw.version_literal(), "2.0");
    assert!(raw.top_level_value("stages").is_some());
}

#[test]
fn test_app_is_loaded_once_across_calls() {
    let (mut factory, fs) = factory_for(r#"{"version": "2.0"}"#);
    let app_file = project_dir().join("app.toml");

    let first = factory.load_app().unwrap();
    let config = factory.create_config(Some("prod"), None, None).unwrap();
    let second = factory.load_app().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, config.app()));
    assert_eq!(fs.read_count(&app_file), 1);
    assert_eq!(fs.read_count(&config_file_path(&project_dir())), 1);
}

#[test]
fn test_resolution_context_gains_project_root() {
    let fs = MockFileSystemProvider::new()
        .with_project(&project_dir(), "{}", APP_TOML)
        .with_directory(project_dir().join("vendor"));
    let mut factory = Factory::with_providers(project_dir(), false, None, fs);

    assert!(factory.resolution_context().entries().is_empty());
    factory.load_app().unwrap();

    assert_eq!(
        factory.resolution_context().entries(),
        &[project_dir(), project_dir().join("vendor")]
    );
}

#[test]
fn test_session_carries_profile_and_debug() {
    let fs = MockFileSystemProvider::new();
    let factory = Factory::with_providers(project_dir(), true, Some("ops".to_string()), fs);

    let session = factory.create_cloud_session().unwrap();

    assert_eq!(session.profile(), Some("ops"));
    assert!(session.user_agent().starts_with("cumulus/"));
    assert!(session.wire_logger().is_some());
}

#[test]
fn test_downstream_collaborators() {
    let (mut factory, _) = factory_for(r#"{"version": "2.0"}"#);
    let session = factory.create_cloud_session().unwrap();

    let deployer = factory.create_default_deployer(session, Box::new(NoPrompt));
    assert!(deployer.confirm("Delete stage?", false).is_ok_and(|answer| !answer));

    let config = factory.create_config(None, None, None).unwrap();
    let packager = factory.create_app_packager(config);
    assert_eq!(packager.artifact_name(), "orders-dev.zip");

    let retriever = factory
        .create_log_retriever(
            factory.create_cloud_session().unwrap(),
            "arn:aws:lambda:us-east-1:123456789012:function:orders-dev",
        )
        .unwrap();
    assert_eq!(retriever.log_group_name(), "/aws/lambda/orders-dev");
}

#[test]
fn test_invalid_arn_surfaces_through_factory() {
    let (factory, _) = factory_for("{}");
    let session = factory.create_cloud_session().unwrap();

    let err = factory.create_log_retriever(session, "not-an-arn").err().unwrap();
    assert!(matches!(err, FactoryError::LogRetriever(_)));
}
