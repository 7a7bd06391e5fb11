/*!
 * Plain-text rendering of validation reports.
 *
 * The renderer is deterministic: the same report always produces the same
 * text. Each issue renders as five labelled lines (Type/Category/Scene/
 * Description/Suggestion) so that downstream consumers can parse issues
 * back out of the text; `parse_issue_blocks` implements that round trip.
 */

use super::service::{
    CheckStatus, IssueCategory, IssueType, ValidationIssue, ValidationReport,
};

const SECTION_RULE: usize = 80;

/// Renderer for `ValidationReport`
#[derive(Debug, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render a full report as plain text
    pub fn render(&self, report: &ValidationReport) -> String {
        let mut output: Vec<String> = Vec::new();

        // Overall status banner
        let status = if report.is_valid { "PASSED" } else { "FAILED" };
        output.push(format!("\n{}", "=".repeat(SECTION_RULE)));
        output.push(format!("VALIDATION REPORT - {}", status));
        output.push(format!("{}\n", "-".repeat(SECTION_RULE)));

        // Timeline section
        output.push("TIMELINE VALIDATION:".to_string());
        if report.timeline_validation.duration_issues.is_empty() {
            output.push("Status: PASS".to_string());
        } else {
            output.push("Status: FAIL".to_string());
            for issue in &report.timeline_validation.duration_issues {
                output.push(format!("  - {}", issue));
            }
        }
        if !report.timeline_validation.suggestions.is_empty() {
            output.push("Pacing Suggestions:".to_string());
            for suggestion in &report.timeline_validation.suggestions {
                output.push(format!("  - {}", suggestion));
            }
        }

        // Technical section
        output.push(format!("\n{}", "=".repeat(SECTION_RULE)));
        output.push("TECHNICAL VALIDATION".to_string());
        output.push(format!("{}\n", "-".repeat(SECTION_RULE)));
        if report.technical_validation.department_conflicts.is_empty() {
            output.push("No department conflicts.".to_string());
        } else {
            output.push("Department Conflicts:".to_string());
            for conflict in &report.technical_validation.department_conflicts {
                output.push(format!("  Scene {}: {}", conflict.scene_number, conflict.note));
            }
        }

        // Issues section
        output.push(format!("\n{}", "=".repeat(SECTION_RULE)));
        output.push("ISSUES".to_string());
        output.push(format!("{}\n", "-".repeat(SECTION_RULE)));
        if report.issues.is_empty() {
            output.push("No issues found.\n".to_string());
        } else {
            output.push("ISSUES FOUND:".to_string());
            for issue in &report.issues {
                output.push(format!("\nType: {}", issue.issue_type));
                output.push(format!("Category: {}", issue.category));
                output.push(format!(
                    "Scene: {}",
                    issue.scene_number.as_deref().unwrap_or("None")
                ));
                output.push(format!("Description: {}", issue.description));
                output.push(format!("Suggestion: {}\n", issue.suggestion));
            }
        }

        // Scene validations
        output.push(format!("\n{}", "=".repeat(SECTION_RULE)));
        output.push("SCENE VALIDATIONS".to_string());
        output.push(format!("{}\n", "-".repeat(SECTION_RULE)));
        for scene_validation in &report.scene_validations {
            output.push(format!("\nSCENE {}:", scene_validation.scene_number));
            for check in &scene_validation.checks {
                let glyph = if check.status == CheckStatus::Pass {
                    "✓"
                } else {
                    "✗"
                };
                output.push(format!("  {} {}: {}", glyph, check.check_name, check.details));
            }
        }

        // Metadata validation
        output.push(format!("\n{}", "=".repeat(SECTION_RULE)));
        output.push("METADATA VALIDATION".to_string());
        output.push(format!("{}\n", "-".repeat(SECTION_RULE)));
        output.push(format!(
            "SMPTE Compliance: {}",
            if report.metadata_validation.smpte_compliance {
                "Yes"
            } else {
                "No"
            }
        ));
        if !report.metadata_validation.missing_fields.is_empty() {
            output.push("\nMissing Fields:".to_string());
            for field in &report.metadata_validation.missing_fields {
                output.push(format!("  - {}", field));
            }
        }
        if !report.metadata_validation.warnings.is_empty() {
            output.push("\nWarnings:".to_string());
            for warning in &report.metadata_validation.warnings {
                output.push(format!("  - {}", warning));
            }
        }

        // Summary
        output.push(format!("\n{}", "=".repeat(SECTION_RULE)));
        output.push("VALIDATION SUMMARY".to_string());
        output.push(format!("{}", "-".repeat(SECTION_RULE)));
        output.push(format!("Total Scenes: {}", report.summary.total_scenes));
        output.push(format!("Valid Scenes: {}", report.summary.valid_scenes));
        output.push(format!(
            "Scenes with Issues: {}",
            report.summary.scenes_with_issues
        ));
        output.push(format!("Total Issues: {}", report.summary.total_issues));

        output.join("\n")
    }

    /// Parse the five-line issue blocks back out of rendered text.
    ///
    /// Inverse of the issue rendering in [`render`](Self::render); used by
    /// consumers that only receive the formatted text.
    pub fn parse_issue_blocks(text: &str) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let lines: Vec<&str> = text.lines().collect();

        let mut i = 0;
        while i < lines.len() {
            let Some(type_str) = lines[i].strip_prefix("Type: ") else {
                i += 1;
                continue;
            };
            if i + 4 >= lines.len() {
                break;
            }
            let category = lines[i + 1].strip_prefix("Category: ");
            let scene = lines[i + 2].strip_prefix("Scene: ");
            let description = lines[i + 3].strip_prefix("Description: ");
            let suggestion = lines[i + 4].strip_prefix("Suggestion: ");

            if let (Some(category), Some(scene), Some(description), Some(suggestion)) =
                (category, scene, description, suggestion)
            {
                let issue_type = match type_str {
                    "error" => Some(IssueType::Error),
                    "warning" => Some(IssueType::Warning),
                    _ => None,
                };
                let category = match category {
                    "continuity" => Some(IssueCategory::Continuity),
                    "timeline" => Some(IssueCategory::Timeline),
                    "metadata" => Some(IssueCategory::Metadata),
                    "fields" => Some(IssueCategory::Fields),
                    "technical" => Some(IssueCategory::Technical),
                    _ => None,
                };
                if let (Some(issue_type), Some(category)) = (issue_type, category) {
                    issues.push(ValidationIssue {
                        issue_type,
                        category,
                        scene_number: if scene == "None" {
                            None
                        } else {
                            Some(scene.to_string())
                        },
                        description: description.to_string(),
                        suggestion: suggestion.to_string(),
                    });
                    i += 5;
                    continue;
                }
            }
            i += 1;
        }

        issues
    }
}
