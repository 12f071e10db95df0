use super::*;
use crate::schema::TickerdockConfig;
use tempfile::TempDir;

#[test]
fn load_from_path_reads_full_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[window]
width = 480
height = 720

[crop]
top = 160
bottom = 60

[page]
url = "https://example.com/q"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.width, 480);
    assert_eq!(config.window.height, 720);
    assert_eq!(config.crop.top, 160);
    assert_eq!(config.crop.bottom, 60);
    assert_eq!(config.page.url, "https://example.com/q");
}

#[test]
fn load_from_path_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, tickerdock_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_from_path_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[window\nwidth = ").unwrap();
    let err = load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse TOML"));
}

#[test]
fn load_from_path_tolerates_invalid_values() {
    // Validation warns but the parsed config is returned as-is.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[window]
width = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.width, 0);
}

#[test]
fn create_default_config_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    let default = TickerdockConfig::default();
    assert_eq!(config.window.width, default.window.width);
    assert_eq!(config.page.url, default.page.url);
}
