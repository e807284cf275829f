use super::*;
use crate::application::providers_mocks::MockFileSystemProvider;

const HELLO_APP: &str = r#"
[app]
name = "helloworld"

[[app.routes]]
path = "/"
handler = "index"
"#;

fn project_root() -> PathBuf {
    PathBuf::from("/projects/hello")
}

fn project_with_app(app_toml: &str) -> MockFileSystemProvider {
    MockFileSystemProvider::new().with_file(project_root().join("app.toml"), app_toml)
}

#[test]
fn test_prepend_unique_is_idempotent() {
    let mut context = ResolutionContext::from_entries([PathBuf::from("/usr/lib/site")]);

    assert!(context.prepend_unique(project_root()));
    assert!(!context.prepend_unique(project_root()));
    assert_eq!(
        context.entries(),
        &[project_root(), PathBuf::from("/usr/lib/site")]
    );
}

#[test]
fn test_append_unique_skips_existing_entries() {
    let mut context = ResolutionContext::from_entries([PathBuf::from("/a")]);
    assert!(!context.append_unique(PathBuf::from("/a")));
    assert!(context.append_unique(PathBuf::from("/b")));
    assert_eq!(context.entries(), &[PathBuf::from("/a"), PathBuf::from("/b")]);
}

#[test]
fn test_search_path_adjustment_twice_keeps_single_entries() {
    let fs = project_with_app(HELLO_APP).with_directory(project_root().join("vendor"));
    let existing = vec![PathBuf::from("/usr/lib/site"), PathBuf::from("/home/dev/lib")];
    let mut loader = ApplicationLoader::with_resolver(
        Box::new(ManifestEntryPointResolver::default()),
        ResolutionContext::from_entries(existing.clone()),
    );

    loader.prepare_search_path(&fs, &project_root());
    loader.prepare_search_path(&fs, &project_root());

    let entries = loader.context().entries();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0], project_root());
    assert_eq!(&entries[1..3], existing.as_slice());
    assert_eq!(entries[3], project_root().join("vendor"));
}

#[test]
fn test_vendor_directory_is_optional() {
    let fs = project_with_app(HELLO_APP);
    let mut loader = ApplicationLoader::new();

    loader.prepare_search_path(&fs, &project_root());

    assert_eq!(loader.context().entries(), &[project_root()]);
}

#[test]
fn test_locate_prefers_earlier_roots() {
    let fs = MockFileSystemProvider::new()
        .with_file(PathBuf::from("/first/app.toml"), HELLO_APP)
        .with_file(PathBuf::from("/second/app.toml"), HELLO_APP);
    let context =
        ResolutionContext::from_entries([PathBuf::from("/second"), PathBuf::from("/first")]);

    assert_eq!(
        context.locate(&fs, "app.toml"),
        Some(PathBuf::from("/second/app.toml"))
    );
}

#[test]
fn test_load_resolves_app_symbol() {
    let fs = project_with_app(HELLO_APP);
    let mut loader = ApplicationLoader::new();

    let app = loader.load(&fs, &project_root()).unwrap();

    assert_eq!(app.name, "helloworld");
    assert_eq!(app.routes.len(), 1);
    assert_eq!(app.source(), project_root().join("app.toml"));
}

#[test]
fn test_load_happens_once() {
    let fs = project_with_app(HELLO_APP);
    let mut loader = ApplicationLoader::new();

    let first = loader.load(&fs, &project_root()).unwrap();
    let second = loader.load(&fs, &project_root()).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(fs.read_count(&project_root().join("app.toml")), 1);
}

#[test]
fn test_syntax_error_is_translated_with_line_and_text() {
    let app_toml = "[app]\nname = \"broken\"\n\n# routes below\nthis is not toml\n";
    let fs = project_with_app(app_toml);
    let mut loader = ApplicationLoader::new();

    let err = loader.load(&fs, &project_root()).unwrap_err();

    match err {
        FactoryError::ApplicationLoad(report) => {
            assert_eq!(report.file, project_root().join("app.toml"));
            assert_eq!(report.line, 5);
            assert_eq!(report.text, "this is not toml");
            assert!(!report.description.is_empty());

            let message = report.to_string();
            assert!(message.starts_with("Unable to import your app.toml file:"));
            assert!(message.contains("line 5"));
            assert!(message.contains("\n  this is not toml\n"));
        }
        other => panic!("expected ApplicationLoad, got {other:?}"),
    }
}

#[test]
fn test_missing_symbol_is_not_translated() {
    let fs = project_with_app("[application]\nname = \"typo\"\n");
    let mut loader = ApplicationLoader::new();

    let err = loader.load(&fs, &project_root()).unwrap_err();

    assert!(matches!(
        err,
        FactoryError::EntryPoint(EntryPointError::MissingSymbol { .. })
    ));
    assert_eq!(err.to_string(), "module 'app' has no attribute 'app'");
}

#[test]
fn test_unrecognized_application_is_not_translated() {
    let fs = project_with_app("app = 42\n");
    let mut loader = ApplicationLoader::new();

    let err = loader.load(&fs, &project_root()).unwrap_err();

    assert!(matches!(
        err,
        FactoryError::EntryPoint(EntryPointError::InvalidApplication { .. })
    ));
}

#[test]
fn test_missing_entry_file_reports_search_path() {
    let fs = MockFileSystemProvider::new().with_directory(project_root());
    let mut loader = ApplicationLoader::new();

    let err = loader.load(&fs, &project_root()).unwrap_err();

    match err {
        FactoryError::EntryPoint(EntryPointError::ModuleNotFound {
            module,
            search_path,
        }) => {
            assert_eq!(module, "app");
            assert_eq!(search_path, vec![project_root()]);
        }
        other => panic!("expected ModuleNotFound, got {other:?}"),
    }
}

#[test]
fn test_failed_load_is_retried() {
    let fs = project_with_app("[app\n");
    let mut loader = ApplicationLoader::new();
    assert!(loader.load(&fs, &project_root()).is_err());

    fs.files
        .lock()
        .unwrap()
        .insert(project_root().join("app.toml"), HELLO_APP.to_string());

    assert_eq!(loader.load(&fs, &project_root()).unwrap().name, "helloworld");
}

#[test]
fn test_line_at_handles_offsets_past_end() {
    let (line, text) = line_at("a = 1\nb = ", 100);
    assert_eq!(line, 2);
    assert_eq!(text, "b = ");
}

#[test]
fn test_line_at_strips_carriage_returns() {
    let (line, text) = line_at("a = 1\r\nbad line\r\n", 8);
    assert_eq!(line, 2);
    assert_eq!(text, "bad line");
}
