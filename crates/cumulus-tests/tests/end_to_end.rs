//! End-to-end bootstrap over real project directories

use anyhow::Result;
use cumulus_lib::FactoryError;
use cumulus_tests::fixtures::BROKEN_APP;
use cumulus_tests::{ProjectTemplate, live_factory};
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_resolves_real_project() -> Result<()> {
    let fixture = ProjectTemplate::default().build()?;
    let mut factory = live_factory(&fixture, false, None);

    let config = factory.create_config(None, None, None)?;

    assert_eq!(config.stage(), "dev");
    assert_eq!(config.app_name(), "orders");
    assert_eq!(config.app().routes.len(), 1);
    assert_eq!(config.app().routes[0].methods, vec!["GET", "POST"]);
    assert_eq!(config.app().functions[0].name, "nightly_report");
    Ok(())
}

#[test]
fn test_missing_config_points_at_project_dir() -> Result<()> {
    let fixture = ProjectTemplate::default().without_config().build()?;
    let mut factory = live_factory(&fixture, false, None);

    let err = factory.create_config(None, None, None).unwrap_err();

    assert!(matches!(err, FactoryError::ConfigUnreadable { .. }));
    let message = err.to_string();
    assert!(message.contains("Are you sure this is a cumulus project?"));
    assert!(message.contains(&fixture.path().display().to_string()));
    Ok(())
}

#[test]
fn test_future_version_is_refused() -> Result<()> {
    let fixture = ProjectTemplate::default()
        .with_config(json!({ "version": "3.0" }))
        .build()?;
    let mut factory = live_factory(&fixture, false, None);

    let err = factory.create_config(None, None, None).unwrap_err();

    assert_eq!(err.to_string(), "Unknown version '3.0' in config.json");
    Ok(())
}

#[test]
fn test_syntax_error_names_file_and_line() -> Result<()> {
    let fixture = ProjectTemplate::default().with_app(BROKEN_APP).build()?;
    let mut factory = live_factory(&fixture, false, None);

    let err = factory.load_app().unwrap_err();

    let FactoryError::ApplicationLoad(report) = &err else {
        panic!("expected ApplicationLoad, got {err:?}");
    };
    assert_eq!(report.line, 5);
    assert_eq!(report.file, fixture.path().join("app.toml"));

    let message = err.to_string();
    assert!(message.starts_with("Unable to import your app.toml file:"));
    assert!(message.contains("line 5"));
    assert!(message.contains("this is not toml"));
    Ok(())
}

#[test]
fn test_stage_values_override_top_level() -> Result<()> {
    let fixture = ProjectTemplate::default()
        .with_config(json!({
            "version": "2.0",
            "app_name": "orders",
            "lambda_timeout": 30,
            "environment_variables": { "TABLE": "orders", "REGION": "us-east-1" },
            "stages": {
                "prod": {
                    "lambda_timeout": 120,
                    "environment_variables": { "TABLE": "orders-prod" }
                }
            }
        }))
        .build()?;
    let mut factory = live_factory(&fixture, false, None);

    let dev = factory.create_config(Some("dev"), None, None)?;
    let prod = factory.create_config(Some("prod"), None, None)?;

    assert_eq!(dev.lambda_timeout(), Some(30));
    assert_eq!(prod.lambda_timeout(), Some(120));

    let env = prod.environment_variables();
    assert_eq!(env["TABLE"], "orders-prod");
    assert_eq!(env["REGION"], "us-east-1");

    // One factory loads the app once for every stage
    assert!(Arc::ptr_eq(dev.app(), prod.app()));
    Ok(())
}

#[test]
fn test_vendor_directory_joins_search_path_last() -> Result<()> {
    let fixture = ProjectTemplate::default().with_vendor().build()?;
    let mut factory = live_factory(&fixture, false, None);

    factory.load_app()?;

    let entries = factory.resolution_context().entries();
    assert_eq!(entries.first(), Some(&fixture.path().to_path_buf()));
    assert_eq!(entries.last(), Some(&fixture.path().join("vendor")));
    assert_eq!(entries.len(), 2);
    Ok(())
}

#[test]
fn test_session_identity_and_debug_filter() -> Result<()> {
    let fixture = ProjectTemplate::default().build()?;
    let factory = live_factory(&fixture, true, Some("ops"));

    let session = factory.create_cloud_session()?;

    assert_eq!(session.profile(), Some("ops"));
    assert_eq!(
        session.user_agent(),
        format!("cumulus/{} reqwest/0.13", env!("CARGO_PKG_VERSION"))
    );
    assert_eq!(
        session.wire_logger().map(|logger| logger.filter_count()),
        Some(1)
    );
    Ok(())
}
