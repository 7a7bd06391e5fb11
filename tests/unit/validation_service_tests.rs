/*!
 * Unit tests for the script validation service
 */

use scriptboard::script::{Scene, ScriptRecord, Timeline, TimelineEntry};
use scriptboard::validation::{
    IssueCategory, IssueType, ScriptValidator, ValidationConfig,
};

use crate::common::{consistent_script, entry, inconsistent_script, scene};

#[test]
fn test_validate_withConsistentScript_shouldPassCleanly() {
    let validator = ScriptValidator::new();

    let report = validator.validate(&consistent_script());

    assert!(report.is_valid);
    assert!(report.issues.is_empty());
    assert!(report.timeline_validation.duration_issues.is_empty());
    assert!(report.timeline_validation.suggestions.is_empty());
    assert_eq!(report.summary.total_scenes, 6);
    assert_eq!(report.summary.valid_scenes, 6);
    assert_eq!(report.summary.scenes_with_issues, 0);
    assert_eq!(report.summary.total_issues, 0);
}

#[test]
fn test_validate_withInconsistentScript_shouldFindNineIssues() {
    let validator = ScriptValidator::new();

    let report = validator.validate(&inconsistent_script());

    assert!(!report.is_valid);
    assert_eq!(report.issues.len(), 9);
    assert_eq!(report.summary.total_scenes, 5);
    assert_eq!(report.summary.valid_scenes, 0);
    assert_eq!(report.summary.scenes_with_issues, 5);
    assert_eq!(report.summary.total_issues, 9);

    // Five duration errors, one per scene, in ascending order
    let continuity = report.issues_in_category(IssueCategory::Continuity);
    assert_eq!(continuity.len(), 5);
    for (issue, expected_scene) in continuity.iter().zip(["1", "2", "3", "4", "5"]) {
        assert_eq!(issue.issue_type, IssueType::Error);
        assert_eq!(issue.scene_number.as_deref(), Some(expected_scene));
    }

    // One timeline total error, carried as a script-level issue
    let timeline = report.issues_in_category(IssueCategory::Timeline);
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0].issue_type, IssueType::Error);
    assert!(timeline[0].scene_number.is_none());
    assert_eq!(
        report.timeline_validation.duration_issues,
        vec!["reported 0:15:00 vs calculated 0:05:00".to_string()]
    );

    // The estimated runtime disagrees with the calculated total too
    let metadata = report.issues_in_category(IssueCategory::Metadata);
    assert_eq!(metadata.len(), 1);
    assert_eq!(metadata[0].issue_type, IssueType::Error);

    // Zero cast count and the rushed setup are advisory
    let fields = report.issues_in_category(IssueCategory::Fields);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].issue_type, IssueType::Warning);

    let technical = report.issues_in_category(IssueCategory::Technical);
    assert_eq!(technical.len(), 1);
    assert_eq!(technical[0].issue_type, IssueType::Warning);
    assert_eq!(technical[0].scene_number.as_deref(), Some("3"));
    assert!(technical[0].description.contains("complexity 3"));
}

#[test]
fn test_validate_withDeclaredTotalMatchingRows_shouldNotFlagTimeline() {
    let validator = ScriptValidator::new();
    let script = consistent_script();

    let report = validator.validate(&script);

    assert!(report.issues_in_category(IssueCategory::Timeline).is_empty());
    assert!(report.timeline_validation.duration_issues.is_empty());
}

#[test]
fn test_validate_withPropsAndCameraNotes_shouldRecordOneConflict() {
    let validator = ScriptValidator::new();
    let mut script = consistent_script();
    script.scenes[1]
        .department_notes
        .insert("props".to_string(), vec!["breakaway bottle".to_string()]);
    script.scenes[1]
        .department_notes
        .insert("camera".to_string(), vec!["dolly track".to_string()]);

    let report = validator.validate(&script);

    let conflicts = &report.technical_validation.department_conflicts;
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].scene_number, "2");
    assert_eq!(conflicts[0].note, "Props and camera movement may interfere");
    // Conflicts are informational and never raise issues
    assert!(report.is_valid);
    assert!(report.issues.is_empty());
}

#[test]
fn test_validate_withOnlyPropsNotes_shouldRecordNoConflict() {
    let validator = ScriptValidator::new();
    let mut script = consistent_script();
    script.scenes[1]
        .department_notes
        .insert("props".to_string(), vec!["breakaway bottle".to_string()]);

    let report = validator.validate(&script);

    assert!(report.technical_validation.department_conflicts.is_empty());
    assert_eq!(
        report.technical_validation.resource_requirements.get("props"),
        Some(&1)
    );
}

#[test]
fn test_validate_withMostlyFastScenes_shouldSuggestSlowingDown() {
    let validator = ScriptValidator::new();
    let script = ScriptRecord {
        scenes: vec![scene("1", 1.0), scene("2", 1.5), scene("3", 3.0)],
        timeline: Timeline {
            entries: vec![entry("1", 1.0), entry("2", 1.5), entry("3", 3.0)],
            total_duration_minutes: 5.5,
        },
        metadata: scriptboard::script::ScriptMetadata {
            total_cast: 3,
            estimated_runtime: "0:05:30".to_string(),
            smpte_compliance: true,
            missing_fields: vec![],
        },
    };

    let report = validator.validate(&script);

    assert!(report.is_valid);
    assert_eq!(report.timeline_validation.suggestions.len(), 1);
    assert!(report.timeline_validation.suggestions[0].contains("too fast-paced"));
    assert_eq!(report.timeline_validation.pacing_analysis.len(), 3);
}

#[test]
fn test_validate_withMissingMetadataFields_shouldWarnPerField() {
    let validator = ScriptValidator::new();
    let mut script = consistent_script();
    script.metadata.missing_fields =
        vec!["genre".to_string(), "writer".to_string()];

    let report = validator.validate(&script);

    assert!(report.is_valid, "missing fields are advisory");
    let fields = report.issues_in_category(IssueCategory::Fields);
    assert_eq!(fields.len(), 2);
    assert!(fields[0].description.contains("'genre'"));
    assert!(fields[1].description.contains("'writer'"));
    assert_eq!(
        report.metadata_validation.missing_fields,
        vec!["genre".to_string(), "writer".to_string()]
    );
}

#[test]
fn test_validate_withUnparseableRuntime_shouldWarnNotFail() {
    let validator = ScriptValidator::new();
    let mut script = consistent_script();
    script.metadata.estimated_runtime = "around twenty minutes".to_string();

    let report = validator.validate(&script);

    assert!(report.is_valid);
    let metadata = report.issues_in_category(IssueCategory::Metadata);
    assert_eq!(metadata.len(), 1);
    assert_eq!(metadata[0].issue_type, IssueType::Warning);
    assert!(metadata[0].description.contains("around twenty minutes"));
    assert!(!report.metadata_validation.warnings.is_empty());
}

#[test]
fn test_validate_withNumericSceneNumbers_shouldSortNumerically() {
    let validator = ScriptValidator::new();
    let script = ScriptRecord {
        scenes: vec![scene("10", 1.0), scene("2", 1.0), scene("1A", 1.0)],
        timeline: Timeline {
            entries: vec![entry("10", 1.0), entry("2", 1.0), entry("1A", 1.0)],
            total_duration_minutes: 3.0,
        },
        metadata: scriptboard::script::ScriptMetadata {
            total_cast: 1,
            estimated_runtime: "0:03:00".to_string(),
            smpte_compliance: false,
            missing_fields: vec![],
        },
    };

    let report = validator.validate(&script);

    let order: Vec<&str> = report
        .scene_validations
        .iter()
        .map(|s| s.scene_number.as_str())
        .collect();
    // Numeric scene numbers sort by value and come before non-numeric ones
    assert_eq!(order, vec!["2", "10", "1A"]);
}

#[test]
fn test_validate_invariants_holdAcrossFixtures() {
    let validator = ScriptValidator::new();
    let fixtures = vec![
        ScriptRecord::default(),
        consistent_script(),
        inconsistent_script(),
    ];

    for script in fixtures {
        let report = validator.validate(&script);

        assert_eq!(report.summary.total_issues, report.issues.len());
        assert_eq!(
            report.is_valid,
            report.issues_of_type(IssueType::Error).is_empty()
        );
        assert!(report.summary.valid_scenes <= report.summary.total_scenes);
    }
}

#[test]
fn test_validate_withCustomSetupThresholds_shouldRespectConfig() {
    let config = ValidationConfig {
        min_setup_seconds: 10.0,
        complexity_threshold: 4,
        ..Default::default()
    };
    let validator = ScriptValidator::with_config(config);
    let script = inconsistent_script();

    let report = validator.validate(&script);

    // Complexity 3 no longer reaches the raised threshold
    assert!(
        report
            .issues_in_category(IssueCategory::Technical)
            .is_empty()
    );
}

#[test]
fn test_validate_withSplitTimelineRows_shouldSumPerScene() {
    let validator = ScriptValidator::new();
    let script = ScriptRecord {
        scenes: vec![Scene {
            scene_number: "1".to_string(),
            duration_minutes: 3.0,
            technical_cues: vec!["CRANE SHOT".to_string()],
            ..Default::default()
        }],
        timeline: Timeline {
            entries: vec![
                TimelineEntry {
                    scene_number: "1".to_string(),
                    duration_minutes: 2.0,
                    setup_time_seconds: 60.0,
                    ..Default::default()
                },
                TimelineEntry {
                    scene_number: "1".to_string(),
                    duration_minutes: 1.0,
                    setup_time_seconds: 60.0,
                    ..Default::default()
                },
            ],
            total_duration_minutes: 3.0,
        },
        metadata: scriptboard::script::ScriptMetadata {
            total_cast: 2,
            estimated_runtime: "0:03:00".to_string(),
            smpte_compliance: true,
            missing_fields: vec![],
        },
    };

    let report = validator.validate(&script);

    assert!(report.is_valid);
    assert!(report.issues.is_empty());
}
