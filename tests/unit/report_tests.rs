/*!
 * Unit tests for validation report rendering and parsing
 */

use scriptboard::validation::{ReportRenderer, ScriptValidator};

use crate::common::{consistent_script, inconsistent_script};

#[test]
fn test_render_withPassingReport_shouldShowBannerAndSections() {
    let renderer = ReportRenderer::new();
    let report = ScriptValidator::new().validate(&consistent_script());

    let text = renderer.render(&report);

    assert!(text.contains("VALIDATION REPORT - PASSED"));
    assert!(text.contains("TIMELINE VALIDATION:"));
    assert!(text.contains("Status: PASS"));
    assert!(text.contains("No department conflicts."));
    assert!(text.contains("No issues found."));
    assert!(text.contains("SCENE VALIDATIONS"));
    assert!(text.contains("METADATA VALIDATION"));
    assert!(text.contains("SMPTE Compliance: Yes"));
    assert!(text.contains("VALIDATION SUMMARY"));
    assert!(text.contains("Total Scenes: 6"));
    assert!(text.contains("Valid Scenes: 6"));
}

#[test]
fn test_render_withFailingReport_shouldListEveryIssue() {
    let renderer = ReportRenderer::new();
    let report = ScriptValidator::new().validate(&inconsistent_script());

    let text = renderer.render(&report);

    assert!(text.contains("VALIDATION REPORT - FAILED"));
    assert!(text.contains("Status: FAIL"));
    assert!(text.contains("  - reported 0:15:00 vs calculated 0:05:00"));
    assert!(text.contains("ISSUES FOUND:"));
    assert_eq!(text.matches("\nType: ").count(), report.issues.len());
    // Script-level issues render their scene as None
    assert!(text.contains("Scene: None"));
    assert!(text.contains("Total Issues: 9"));
}

#[test]
fn test_render_separators_shouldBeEightyColumns() {
    let renderer = ReportRenderer::new();
    let report = ScriptValidator::new().validate(&consistent_script());

    let text = renderer.render(&report);

    assert!(text.contains(&"=".repeat(80)));
    assert!(text.contains(&"-".repeat(80)));
    assert!(!text.contains(&"=".repeat(81)));
    assert!(!text.contains(&"-".repeat(81)));
}

#[test]
fn test_render_sceneChecks_shouldUsePassFailGlyphs() {
    let renderer = ReportRenderer::new();
    let mut script = consistent_script();
    script.scenes[0].technical_cues.clear();
    let report = ScriptValidator::new().validate(&script);

    let text = renderer.render(&report);

    assert!(text.contains("SCENE 1:"));
    assert!(text.contains("✓ duration_consistency: Scene duration matches timeline breakdown"));
    assert!(text.contains("✗ technical_cues: No technical cues listed"));
}

#[test]
fn test_parseIssueBlocks_shouldRoundTripFullReport() {
    let renderer = ReportRenderer::new();
    let report = ScriptValidator::new().validate(&inconsistent_script());

    let text = renderer.render(&report);
    let parsed = ReportRenderer::parse_issue_blocks(&text);

    assert_eq!(parsed.len(), report.issues.len());
    for (parsed, original) in parsed.iter().zip(report.issues.iter()) {
        assert_eq!(parsed.issue_type, original.issue_type);
        assert_eq!(parsed.category, original.category);
        assert_eq!(parsed.scene_number, original.scene_number);
        assert_eq!(parsed.description, original.description);
        assert_eq!(parsed.suggestion, original.suggestion);
    }
}

#[test]
fn test_parseIssueBlocks_withUnrelatedText_shouldFindNothing() {
    let renderer = ReportRenderer::new();
    let report = ScriptValidator::new().validate(&consistent_script());

    let text = renderer.render(&report);

    assert!(ReportRenderer::parse_issue_blocks(&text).is_empty());
}

#[test]
fn test_render_isDeterministic() {
    let renderer = ReportRenderer::new();
    let report = ScriptValidator::new().validate(&inconsistent_script());

    assert_eq!(renderer.render(&report), renderer.render(&report));
}
