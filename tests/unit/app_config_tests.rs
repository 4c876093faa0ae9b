/*!
 * Tests for application configuration functionality
 */

use std::fs;
use tempfile::TempDir;
use ytsubtrans::app_config::{Config, LogLevel};
use ytsubtrans::language_utils::Language;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, Language::Malayalam);
    assert_eq!(config.target_language, Language::English);
    assert_eq!(config.server.bind_address, "127.0.0.1:8501");
    assert_eq!(config.youtube.endpoint, "https://www.youtube.com");
    assert_eq!(config.translator.endpoint, "https://translate.googleapis.com");
    assert_eq!(config.retry.transcript_max_attempts, 5);
    assert_eq!(config.retry.transcript_retry_delay_ms, 2000);
    assert_eq!(config.retry.translation_max_attempts, 3);
    assert_eq!(config.retry.translation_backoff_min_ms, 5000);
    assert_eq!(config.retry.translation_backoff_max_ms, 10000);
    assert_eq!(config.retry.chunk_size, 500);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    config.retry.transcript_max_attempts = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.retry.translation_max_attempts = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.retry.chunk_size = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.retry.translation_backoff_min_ms = 11000;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.translator.endpoint = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_loadOrDefault_missingFile_shouldUseDefaultsWithoutWriting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf.json");

    let config = Config::load_or_default(&path).unwrap();

    assert_eq!(config.retry.chunk_size, 500);
    assert!(!path.exists());
}

#[test]
fn test_loadOrDefault_partialFile_shouldFillMissingFields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf.json");
    fs::write(&path, r#"{
        "source_language": "ta",
        "target_language": "hi",
        "retry": { "chunk_size": 200 },
        "log_level": "warn"
    }"#).unwrap();

    let config = Config::load_or_default(&path).unwrap();

    assert_eq!(config.source_language, Language::Tamil);
    assert_eq!(config.target_language, Language::Hindi);
    assert_eq!(config.retry.chunk_size, 200);
    assert_eq!(config.retry.transcript_max_attempts, 5);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Warn);
}

#[test]
fn test_loadOrDefault_unsupportedLanguage_shouldFail() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf.json");
    fs::write(&path, r#"{ "source_language": "fr" }"#).unwrap();

    assert!(Config::load_or_default(&path).is_err());
}
