// tests/config_test.rs
use branch_version::config::{load_config, Config, CONFIG_FILE_NAME};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.main_release_branch, "master");
    assert_eq!(
        config.release_branch_prefixes,
        vec!["support-".to_string(), "support/".to_string()]
    );
    assert!(!config.disable_branch_versioning);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
main_release_branch = "trunk"
release_branch_prefixes = ["maint/"]
disable_branch_versioning = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap()), Path::new(".")).unwrap();
    assert_eq!(config.main_release_branch, "trunk");
    assert_eq!(config.release_branch_prefixes, vec!["maint/".to_string()]);
    assert!(config.disable_branch_versioning);
    assert_eq!(config.release_profile, "release");
}

#[test]
fn test_load_from_execution_root() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "main_release_branch = \"main\"\n",
    )
    .unwrap();

    let config = load_config(None, dir.path()).unwrap();
    assert_eq!(config.main_release_branch, "main");
}

#[test]
fn test_fixture_config() {
    let config = load_config(Some("tests/fixtures/branchversion.toml"), Path::new("."))
        .expect("Failed to load test config");
    assert_eq!(config.main_release_branch, "main");
    assert_eq!(
        config.release_branch_prefixes,
        vec!["release/".to_string(), "hotfix-".to_string()]
    );
    assert_eq!(config.release_profile, "publish");
    assert!(config.descriptors.keep);
    assert_eq!(config.descriptors.directory, None);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = load_config(Some("tests/fixtures/does-not-exist.toml"), Path::new(".")).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"release_branch_prefixes = 3").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap()), Path::new(".")).is_err());
}
