use super::*;

#[test]
fn test_project_layout() {
    let fixture = ProjectFixture::with_project("{}", "[app]\nname = \"orders\"\n").unwrap();

    assert!(fixture.file_exists(".cumulus/config.json"));
    assert!(fixture.file_exists("app.toml"));
    assert!(!fixture.file_exists("vendor"));
}

#[test]
fn test_create_vendor() {
    let fixture = ProjectFixture::new().unwrap();
    let vendor = fixture.create_vendor().unwrap();

    assert!(vendor.is_dir());
    assert_eq!(vendor, fixture.path().join("vendor"));
}

#[test]
fn test_cleanup_on_drop() {
    let path = {
        let fixture = ProjectFixture::new().unwrap();
        fixture.write_config("{}").unwrap();
        fixture.path().to_path_buf()
    };

    assert!(!path.exists());
}
