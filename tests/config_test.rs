//! 설정 파일 테스트

use major_compass::config::{mask_api_key, Config};
use tempfile::tempdir;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert!(config.api_key.is_none());
    assert!(config.model.is_none());
    assert_eq!(config.timeout_seconds, 120);
}

#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        api_key: Some("AIzaTest".to_string()),
        model: Some("gemini-1.5-pro".to_string()),
        timeout_seconds: 30,
    };
    config.save_to(&path).expect("설정 저장 실패");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.api_key.as_deref(), Some("AIzaTest"));
    assert_eq!(loaded.model.as_deref(), Some("gemini-1.5-pro"));
    assert_eq!(loaded.timeout_seconds, 30);
}

/// 일부 항목만 있는 파일
#[test]
fn test_partial_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"model": "gemini-1.5-flash"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.model.as_deref(), Some("gemini-1.5-flash"));
    assert_eq!(config.timeout_seconds, 120);
}

#[test]
fn test_broken_config_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "api_key = 1").unwrap();

    assert!(Config::load_from(&path).is_err());
}

/// 명령줄 인자가 가장 우선
#[test]
fn test_flag_api_key_wins() {
    let config = Config {
        api_key: Some("stored".to_string()),
        ..Default::default()
    };
    assert_eq!(config.resolve_api_key(Some("from-flag")).as_deref(), Some("from-flag"));
}

#[test]
fn test_mask_api_key() {
    assert_eq!(mask_api_key("AIzaSyExample"), "AIza****");
    assert_eq!(mask_api_key("abc"), "****");
}
