/*!
 * Tests for application configuration functionality
 */

use variorum::app_config::{Config, LogLevel};

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert!(config.pretty_output);
    assert!(config.report_path.is_none());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // An explicit report path is fine
    config.report_path = Some("report.json".to_string());
    assert!(config.validate().is_ok());

    // An empty report path is not
    config.report_path = Some("".to_string());
    assert!(config.validate().is_err());
}

/// Test round-tripping a configuration through a file
#[test]
fn test_config_saveAndLoad_withTempFile_shouldRoundTrip() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("conf.json");

    let config = Config {
        pretty_output: false,
        report_path: Some("out/report.json".to_string()),
        log_level: LogLevel::Debug,
    };
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_default(&config_path).unwrap();
    assert!(!loaded.pretty_output);
    assert_eq!(loaded.report_path.as_deref(), Some("out/report.json"));
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

/// Test loading from a missing file falls back to defaults
#[test]
fn test_config_load_withMissingFile_shouldReturnDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("does-not-exist.json");

    let loaded = Config::load_or_default(&config_path).unwrap();
    assert_eq!(loaded.log_level, Config::default().log_level);
    assert!(loaded.pretty_output);
}
