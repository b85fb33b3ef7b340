//! Configuration file loading.

use std::fs;
use std::path::PathBuf;
use storefront_console::{Config, ConsoleError, Page};

#[test]
fn reads_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storefront.toml");
    fs::write(
        &path,
        r#"
fixtures_path = "data/store.json"
trace_level = "debug"
log_file = "logs/console.log"
default_page = "products"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.fixtures_path, Some(PathBuf::from("data/store.json")));
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert_eq!(config.log_file, Some(PathBuf::from("logs/console.log")));
    assert_eq!(config.default_page, Page::Products);
}

#[test]
fn missing_fields_take_defaults() {
    let config = Config::from_toml_str(r#"trace_level = "warn""#).unwrap();
    assert_eq!(config.default_page, Page::Dashboard);
    assert!(config.fixtures_path.is_none());
    assert!(config.log_file.is_none());
}

#[test]
fn malformed_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "default_page = ").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    let ConsoleError::Config(message) = err else {
        panic!("expected config error, got {err:?}");
    };
    assert!(message.contains("broken.toml"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Config::from_file("/nonexistent/storefront.toml").unwrap_err();
    assert!(matches!(err, ConsoleError::Io(_)));
}
