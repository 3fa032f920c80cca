//! Tests for configuration loading and validation

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_valid_config() {
    let file = write_config(
        r#"
[search]
debounce_ms = 50
search_in_new_page = true
page_url = "https://intranet.example.com/search.aspx"
query_path_behavior = "url_fragment"
"#,
    );

    let result = load_config_from_path(file.path());
    assert!(result.warning.is_none());
    assert_eq!(result.config.search.debounce_ms, 50);
    assert!(result.config.search.search_in_new_page);
    assert_eq!(
        result.config.search.query_path_behavior,
        QueryPathBehavior::UrlFragment
    );
}

#[test]
fn test_missing_file_falls_back_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from_path(&dir.path().join("nope.toml"));
    assert!(result.warning.is_some());
    assert!(result.warning.unwrap().contains("Failed to read"));
    assert!(result.config.search.enable_suggestions);
}

#[test]
fn test_invalid_toml_falls_back_with_warning() {
    let file = write_config("[search\ndebounce_ms = ");
    let result = load_config_from_path(file.path());
    let warning = result.warning.expect("expected a warning");
    assert!(warning.contains("Failed to parse config"));
    assert_eq!(result.config.search.debounce_ms, DEFAULT_DEBOUNCE_MS);
}

#[test]
fn test_new_page_without_page_url_is_invalid() {
    let config = EngineConfig {
        search_in_new_page: true,
        ..EngineConfig::default()
    };
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("page_url"));
}

#[test]
fn test_new_page_with_unparseable_url_is_invalid() {
    let config = EngineConfig {
        search_in_new_page: true,
        page_url: Some("not a url".to_string()),
        ..EngineConfig::default()
    };
    assert!(matches!(validate(&config), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_zero_trigger_length_is_invalid() {
    let config = EngineConfig {
        minimum_trigger_length: 0,
        ..EngineConfig::default()
    };
    assert!(validate(&config).is_err());
}

#[test]
fn test_empty_query_parameter_is_invalid_in_query_mode() {
    let config = EngineConfig {
        search_in_new_page: true,
        page_url: Some("https://example.com/search".to_string()),
        query_string_parameter: "  ".to_string(),
        ..EngineConfig::default()
    };
    assert!(validate(&config).is_err());

    let fragment = EngineConfig {
        query_path_behavior: QueryPathBehavior::UrlFragment,
        ..config
    };
    assert!(validate(&fragment).is_ok());
}

#[test]
fn test_default_config_is_valid() {
    assert!(validate(&EngineConfig::default()).is_ok());
}
