use super::*;
use crate::application::providers_mocks::MockFileSystemProvider;
use crate::project::loader::EntryPointError;

const APP_TOML: &str = "[app]\nname = \"orders\"\n";

fn project_dir() -> PathBuf {
    PathBuf::from("/projects/orders")
}

fn project(config_json: &str) -> MockFileSystemProvider {
    MockFileSystemProvider::new().with_project(&project_dir(), config_json, APP_TOML)
}

#[test]
fn test_missing_config_is_unreadable() {
    let fs = MockFileSystemProvider::new()
        .with_directory(project_dir())
        .with_file(project_dir().join("app.toml"), APP_TOML);
    let mut loader = ApplicationLoader::new();
    let dir = project_dir();

    let err = ConfigResolver::new(&dir, None, &fs, &mut loader)
        .resolve(ResolveRequest::default())
        .unwrap_err();

    match err {
        FactoryError::ConfigUnreadable {
            project_dir,
            source,
        } => {
            assert_eq!(project_dir, dir);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected ConfigUnreadable, got {other:?}"),
    }
}

#[test]
fn test_permission_denied_is_unreadable() {
    let fs = MockFileSystemProvider::new()
        .with_unreadable_file(config_file_path(&project_dir()))
        .with_file(project_dir().join("app.toml"), APP_TOML);
    let mut loader = ApplicationLoader::new();
    let dir = project_dir();

    let err = ConfigResolver::new(&dir, None, &fs, &mut loader)
        .resolve(ResolveRequest::default())
        .unwrap_err();

    assert!(matches!(err, FactoryError::ConfigUnreadable { .. }));
}

#[test]
fn test_malformed_json_is_not_wrapped() {
    let fs = project("{\"version\": ");
    let mut loader = ApplicationLoader::new();
    let dir = project_dir();

    let err = ConfigResolver::new(&dir, None, &fs, &mut loader)
        .resolve(ResolveRequest::default())
        .unwrap_err();

    assert!(matches!(err, FactoryError::InvalidConfigJson(_)));
}

#[test]
fn test_version_checked_before_app_is_loaded() {
    let fs = project("{\"version\": \"3.0\"}");
    let mut loader = ApplicationLoader::new();
    let dir = project_dir();

    let err = ConfigResolver::new(&dir, None, &fs, &mut loader)
        .resolve(ResolveRequest::default())
        .unwrap_err();

    assert!(matches!(
        err,
        FactoryError::UnknownConfigVersion { ref version } if version == "3.0"
    ));
    assert_eq!(fs.read_count(&dir.join("app.toml")), 0);
    assert!(loader.context().entries().is_empty());
}

#[test]
fn test_resolve_places_overrides_in_user_layer() {
    let fs = project("{\"version\": \"2.0\", \"autogen_policy\": false, \"profile\": \"disk\"}");
    let mut loader = ApplicationLoader::new();
    let dir = project_dir();

    let request = ResolveRequest::for_stage("prod")
        .with_autogen_policy(Some(true))
        .with_api_gateway_stage(Some("v2".to_string()));
    let config = ConfigResolver::new(&dir, Some("ops"), &fs, &mut loader)
        .resolve(request)
        .unwrap();

    assert_eq!(config.stage(), "prod");
    assert!(config.autogen_policy());
    assert_eq!(config.profile().as_deref(), Some("ops"));
    assert_eq!(config.api_gateway_stage(), "v2");
    assert_eq!(config.app().name, "orders");
    assert_eq!(config.project_dir(), dir.as_path());
}

#[test]
fn test_unset_overrides_leave_lower_layers_visible() {
    let fs = project("{\"autogen_policy\": false, \"profile\": \"disk\"}");
    let mut loader = ApplicationLoader::new();
    let dir = project_dir();

    let config = ConfigResolver::new(&dir, None, &fs, &mut loader)
        .resolve(ResolveRequest::default())
        .unwrap();

    assert_eq!(config.stage(), "dev");
    assert!(!config.autogen_policy());
    assert_eq!(config.profile().as_deref(), Some("disk"));
    assert_eq!(config.api_gateway_stage(), "api");
}

#[test]
fn test_application_errors_surface_from_resolve() {
    let fs = MockFileSystemProvider::new().with_project(&project_dir(), "{}", "name = \"orders\"\n");
    let mut loader = ApplicationLoader::new();
    let dir = project_dir();

    let err = ConfigResolver::new(&dir, None, &fs, &mut loader)
        .resolve(ResolveRequest::default())
        .unwrap_err();

    assert!(matches!(
        err,
        FactoryError::EntryPoint(EntryPointError::MissingSymbol { .. })
    ));
}
