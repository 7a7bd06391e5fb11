/*!
 * Unit tests for application configuration
 */

use scriptboard::app_config::{Config, LogLevel};

use crate::common::{create_temp_dir, create_test_file};

#[test]
fn test_fromFile_withEmptyObject_shouldYieldDefaults() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(&dir.path().to_path_buf(), "config.json", "{}").unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.provider.model, "gpt-4");
    assert_eq!(config.provider.timeout_secs, 120);
    assert_eq!(config.storage.validation_dir, "data/validation");
    assert!(config.validation.escalate_missing_cues);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_fromFile_withNestedValidationSection_shouldApplyIt() {
    let dir = create_temp_dir().unwrap();
    let content = r#"{
        "validation": {
            "epsilon_minutes": 0.25,
            "escalate_missing_cues": false,
            "interfering_pairs": [
                {
                    "departments": ["stunts", "sound"],
                    "note": "Stunt rigging noise may bleed into production audio"
                }
            ]
        },
        "log_level": "debug"
    }"#;
    let path = create_test_file(&dir.path().to_path_buf(), "config.json", content).unwrap();

    let config = Config::from_file(&path).unwrap();

    assert!((config.validation.epsilon_minutes - 0.25).abs() < f64::EPSILON);
    assert!(!config.validation.escalate_missing_cues);
    assert_eq!(config.validation.interfering_pairs.len(), 1);
    assert_eq!(
        config.validation.interfering_pairs[0].departments,
        ["stunts".to_string(), "sound".to_string()]
    );
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_fromFile_withMalformedJson_shouldError() {
    let dir = create_temp_dir().unwrap();
    let path =
        create_test_file(&dir.path().to_path_buf(), "config.json", "{not json").unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_fromFile_withMissingFile_shouldError() {
    assert!(Config::from_file("/nonexistent/config.json").is_err());
}

#[test]
fn test_toFile_shouldWriteLowercaseLogLevel() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("config.json");
    let config = Config {
        log_level: LogLevel::Trace,
        ..Default::default()
    };

    config.to_file(&path).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["log_level"], "trace");
    assert_eq!(written["provider"]["image_model"], "dall-e-3");
}
