//! Tests for configuration handling.

use fanc_utils::{CONFIG_FILE_NAME, Config, DiagnosticStyle};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_new() {
    let config = Config::new();
    assert_eq!(config.diagnostics.style, DiagnosticStyle::Plain);
    assert!(config.output.summary);
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

    let mut config = Config::new();
    config.diagnostics.style = DiagnosticStyle::Fancy;
    config.output.summary = false;
    config.save(&config_path).unwrap();

    let loaded = Config::load(&config_path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_saved_file_contents() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

    Config::new().save(&config_path).unwrap();
    let contents = fs::read_to_string(&config_path).unwrap();
    insta::assert_snapshot!(contents.trim_end(), @r#"
    [diagnostics]
    style = "plain"

    [output]
    summary = true
    "#);
}

#[test]
fn test_config_load_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&config_path, "[output]\nsummary = \"yes\"\n").unwrap();

    let err = Config::load(&config_path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse"));
}

#[test]
fn test_config_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}

#[test]
fn test_config_find_from_subdirectory() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path();

    // Create a fanc.toml in the temp directory
    let mut config = Config::new();
    config.output.summary = false;
    config.save(project_dir.join(CONFIG_FILE_NAME)).unwrap();

    // Create a nested subdirectory
    let sub_dir = project_dir.join("src").join("nested");
    fs::create_dir_all(&sub_dir).unwrap();

    let (found_config, found_dir) = Config::find_from(&sub_dir).unwrap().unwrap();
    assert!(!found_config.output.summary);
    assert_eq!(found_dir, project_dir);
}

#[test]
fn test_config_find_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join("empty");
    fs::create_dir(&sub_dir).unwrap();

    // A fanc.toml above the temp directory would be found; only check the
    // result is consistent with the file system.
    let found = Config::find_from(&sub_dir).unwrap();
    if let Some((_, dir)) = found {
        assert!(dir.join(CONFIG_FILE_NAME).exists());
        assert!(!dir.starts_with(temp_dir.path()));
    }
}
