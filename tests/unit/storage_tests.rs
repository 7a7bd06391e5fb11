/*!
 * Unit tests for JSON artifact storage
 */

use scriptboard::storage::{read_script_record, write_validation_result};
use scriptboard::validation::{ReportRenderer, ScriptValidator};

use crate::common::{consistent_script, create_temp_dir, create_test_file, inconsistent_script};

#[test]
fn test_readScriptRecord_withParserEnvelope_shouldUnwrapParsedData() {
    let dir = create_temp_dir().unwrap();
    let envelope = serde_json::json!({
        "parsed_data": consistent_script(),
        "processing_status": {"stage": "complete"},
        "statistics": {"scene_count": 6},
    });
    let path = create_test_file(
        &dir.path().to_path_buf(),
        "parsed.json",
        &envelope.to_string(),
    )
    .unwrap();

    let record = read_script_record(&path).unwrap();

    assert_eq!(record.scenes.len(), 6);
    assert!((record.timeline.total_duration_minutes - 18.0).abs() < f64::EPSILON);
}

#[test]
fn test_readScriptRecord_withMissingSections_shouldDefaultThem() {
    let dir = create_temp_dir().unwrap();
    // A minimal record straight from a partial parser run
    let content = r#"{"scenes": [{"scene_number": "1", "description": "Opening shot."}]}"#;
    let path = create_test_file(&dir.path().to_path_buf(), "bare.json", content).unwrap();

    let record = read_script_record(&path).unwrap();

    assert_eq!(record.scenes.len(), 1);
    assert_eq!(record.scenes[0].scene_number, "1");
    assert!(record.scenes[0].technical_cues.is_empty());
    assert!(record.timeline.entries.is_empty());
    assert_eq!(record.metadata.total_cast, 0);
}

#[test]
fn test_readScriptRecord_withMalformedRecord_shouldError() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(
        &dir.path().to_path_buf(),
        "broken.json",
        r#"{"scenes": "not a list"}"#,
    )
    .unwrap();

    assert!(read_script_record(&path).is_err());
}

#[test]
fn test_writeValidationResult_shouldRoundTripThroughFormattedText() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("results/validation.json");
    let report = ScriptValidator::new().validate(&inconsistent_script());
    let text = ReportRenderer::new().render(&report);

    write_validation_result(&path, &report, &text).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["is_valid"], false);
    assert_eq!(
        written["validation_report"]["summary"]["total_issues"], 9
    );

    // The embedded text still parses back into the same issue list
    let embedded = written["formatted_text"].as_str().unwrap();
    let parsed = ReportRenderer::parse_issue_blocks(embedded);
    assert_eq!(parsed.len(), report.issues.len());
}

#[test]
fn test_writeValidationResult_shouldCreateParentDirectories() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("a/b/c/validation.json");
    let report = ScriptValidator::new().validate(&consistent_script());

    write_validation_result(&path, &report, "text").unwrap();

    assert!(path.exists());
}
