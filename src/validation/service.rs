/*!
 * Validation service that orchestrates all script checks.
 *
 * `ScriptValidator::validate` runs the fixed check sequence over a
 * `ScriptRecord` and produces a `ValidationReport`. The call is pure: it
 * borrows the script read-only, performs no I/O, and converts every data
 * anomaly into a `ValidationIssue` instead of returning an error.
 *
 * Check order is fixed; within a check, scenes are processed in ascending
 * scene_number order:
 * 1. Duration consistency (scene vs timeline rows)
 * 2. Technical cues present
 * 3. Timeline total duration
 * 4. Metadata runtime cross-check
 * 5. Field completeness
 * 6. Setup-time feasibility
 * 7. Pacing analysis (advisory)
 * 8. Department conflict detection (informational)
 */

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::script::{ScriptRecord, compare_scene_numbers};

use super::continuity::{
    ContinuityValidator, ContinuityValidatorConfig, DURATION_SUGGESTION, SceneContinuityResult,
};
use super::metadata::MetadataValidator;
use super::technical::{
    DepartmentConflict, InterferingPair, TechnicalValidator, TechnicalValidatorConfig,
};
use super::timeline::{ScenePacing, TimelineValidator, TimelineValidatorConfig};

/// Configuration for the validation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Allowed difference in minutes for the timeline total check
    #[serde(default)]
    pub epsilon_minutes: f64,

    /// Durations strictly below this classify as FAST
    #[serde(default = "default_fast_max")]
    pub fast_max_minutes: f64,

    /// Durations strictly above this classify as SLOW
    #[serde(default = "default_slow_min")]
    pub slow_min_minutes: f64,

    /// Fraction of FAST scenes that triggers the pacing suggestion
    #[serde(default = "default_fast_ratio")]
    pub fast_pacing_ratio: f64,

    /// Whether missing technical cues escalate to a report-level warning
    #[serde(default = "default_true")]
    pub escalate_missing_cues: bool,

    /// Minimum setup seconds for technically complex scenes
    #[serde(default = "default_min_setup")]
    pub min_setup_seconds: f64,

    /// Complexity rating that triggers the setup check
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: u32,

    /// Department pairs treated as interfering
    #[serde(default = "default_interfering_pairs")]
    pub interfering_pairs: Vec<InterferingPair>,
}

fn default_true() -> bool {
    true
}

fn default_fast_max() -> f64 {
    2.0
}

fn default_slow_min() -> f64 {
    4.0
}

fn default_fast_ratio() -> f64 {
    0.5
}

fn default_min_setup() -> f64 {
    30.0
}

fn default_complexity_threshold() -> u32 {
    2
}

fn default_interfering_pairs() -> Vec<InterferingPair> {
    TechnicalValidatorConfig::default().interfering_pairs
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            epsilon_minutes: 0.0,
            fast_max_minutes: default_fast_max(),
            slow_min_minutes: default_slow_min(),
            fast_pacing_ratio: default_fast_ratio(),
            escalate_missing_cues: true,
            min_setup_seconds: default_min_setup(),
            complexity_threshold: default_complexity_threshold(),
            interfering_pairs: default_interfering_pairs(),
        }
    }
}

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    /// Blocks downstream acceptance
    Error,
    /// Advisory only
    Warning,
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::Error => write!(f, "error"),
            IssueType::Warning => write!(f, "warning"),
        }
    }
}

/// Category of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    /// Scene/timeline continuity
    Continuity,
    /// Timeline totals
    Timeline,
    /// Script-level metadata
    Metadata,
    /// Required field completeness
    Fields,
    /// Technical feasibility
    Technical,
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueCategory::Continuity => write!(f, "continuity"),
            IssueCategory::Timeline => write!(f, "timeline"),
            IssueCategory::Metadata => write!(f, "metadata"),
            IssueCategory::Fields => write!(f, "fields"),
            IssueCategory::Technical => write!(f, "technical"),
        }
    }
}

/// A single validation finding. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Severity
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    /// Category
    pub category: IssueCategory,
    /// Scene this issue concerns, None for script-level findings
    pub scene_number: Option<String>,
    /// What was found
    pub description: String,
    /// Suggested fix
    pub suggestion: String,
}

impl ValidationIssue {
    /// Create an error issue
    pub fn error(
        category: IssueCategory,
        scene_number: Option<String>,
        description: String,
        suggestion: String,
    ) -> Self {
        Self {
            issue_type: IssueType::Error,
            category,
            scene_number,
            description,
            suggestion,
        }
    }

    /// Create a warning issue
    pub fn warning(
        category: IssueCategory,
        scene_number: Option<String>,
        description: String,
        suggestion: String,
    ) -> Self {
        Self {
            issue_type: IssueType::Warning,
            category,
            scene_number,
            description,
            suggestion,
        }
    }
}

/// Pass/fail status of a per-scene check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Check passed
    Pass,
    /// Check failed
    Fail,
}

/// One named check result for a scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneCheck {
    /// Name of the check
    pub check_name: String,
    /// Pass/fail status
    pub status: CheckStatus,
    /// Fixed details string
    pub details: String,
}

/// All check results for one scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneValidation {
    /// Scene these checks describe
    pub scene_number: String,
    /// Check results in check order
    pub checks: Vec<SceneCheck>,
}

impl SceneValidation {
    /// Whether every check passed
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.status == CheckStatus::Pass)
    }
}

/// Metadata sub-report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataValidation {
    /// SMPTE compliance flag, passed through from the input
    pub smpte_compliance: bool,
    /// Required fields the parser could not populate
    pub missing_fields: Vec<String>,
    /// Metadata warning strings
    pub warnings: Vec<String>,
}

/// Timeline sub-report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineValidation {
    /// `reported X vs calculated Y` strings for duration mismatches
    pub duration_issues: Vec<String>,
    /// Per-scene pacing classification
    pub pacing_analysis: Vec<ScenePacing>,
    /// Pacing suggestions
    pub suggestions: Vec<String>,
}

/// Technical sub-report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnicalValidation {
    /// Department conflicts, keyed by scene
    pub department_conflicts: Vec<DepartmentConflict>,
    /// Requirement counts per department across the script
    pub resource_requirements: BTreeMap<String, usize>,
}

/// Summary counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Number of scenes in the script
    pub total_scenes: usize,
    /// Scenes with every per-scene check passing
    pub valid_scenes: usize,
    /// Distinct scenes appearing in any issue or failed check
    pub scenes_with_issues: usize,
    /// Total issue count, always equal to `issues.len()`
    pub total_issues: usize,
}

/// Complete validation report for one script
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff no error-typed issue exists
    pub is_valid: bool,
    /// All issues in check order
    pub issues: Vec<ValidationIssue>,
    /// Per-scene check results in ascending scene order
    pub scene_validations: Vec<SceneValidation>,
    /// Metadata sub-report
    pub metadata_validation: MetadataValidation,
    /// Timeline sub-report
    pub timeline_validation: TimelineValidation,
    /// Technical sub-report
    pub technical_validation: TechnicalValidation,
    /// Summary counters
    pub summary: ValidationSummary,
}

impl ValidationReport {
    /// Issues of a given severity
    pub fn issues_of_type(&self, issue_type: IssueType) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.issue_type == issue_type)
            .collect()
    }

    /// Issues of a given category
    pub fn issues_in_category(&self, category: IssueCategory) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|i| i.category == category).collect()
    }
}

/// Validator for parsed script records
pub struct ScriptValidator {
    config: ValidationConfig,
    continuity: ContinuityValidator,
    timeline: TimelineValidator,
    technical: TechnicalValidator,
    metadata: MetadataValidator,
}

impl ScriptValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        let continuity = ContinuityValidator::with_config(ContinuityValidatorConfig {
            escalate_missing_cues: config.escalate_missing_cues,
        });
        let timeline = TimelineValidator::with_config(TimelineValidatorConfig {
            epsilon_minutes: config.epsilon_minutes,
            fast_max_minutes: config.fast_max_minutes,
            slow_min_minutes: config.slow_min_minutes,
            fast_pacing_ratio: config.fast_pacing_ratio,
        });
        let technical = TechnicalValidator::with_config(TechnicalValidatorConfig {
            min_setup_seconds: config.min_setup_seconds,
            complexity_threshold: config.complexity_threshold,
            interfering_pairs: config.interfering_pairs.clone(),
        });

        Self {
            config,
            continuity,
            timeline,
            technical,
            metadata: MetadataValidator::new(),
        }
    }

    /// Run all checks over a script and build the report.
    ///
    /// Never panics and never returns an error: malformed data turns into
    /// issues, and an empty scene list produces a single structural error.
    pub fn validate(&self, script: &ScriptRecord) -> ValidationReport {
        if script.scenes.is_empty() {
            return Self::empty_script_report();
        }

        let scenes = script.scenes_sorted();
        let mut issues: Vec<ValidationIssue> = Vec::new();
        let mut failed_check_scenes: BTreeSet<String> = BTreeSet::new();

        // Checks 1 and 2: per-scene continuity
        let continuity_results: Vec<SceneContinuityResult> = scenes
            .iter()
            .map(|scene| self.continuity.validate_scene(scene, &script.timeline))
            .collect();

        for result in &continuity_results {
            if !result.duration_matches {
                issues.push(ValidationIssue::error(
                    IssueCategory::Continuity,
                    Some(result.scene_number.clone()),
                    result.mismatch_description(),
                    DURATION_SUGGESTION.to_string(),
                ));
                failed_check_scenes.insert(result.scene_number.clone());
            }
        }

        for result in &continuity_results {
            if !result.has_technical_cues {
                failed_check_scenes.insert(result.scene_number.clone());
                if self.continuity.escalates_missing_cues() {
                    issues.push(ValidationIssue::warning(
                        IssueCategory::Technical,
                        Some(result.scene_number.clone()),
                        format!("Scene {} has no technical cues", result.scene_number),
                        "Add technical cues for the camera, lighting, or sound departments."
                            .to_string(),
                    ));
                }
            }
        }

        let scene_validations: Vec<SceneValidation> = continuity_results
            .iter()
            .map(|result| SceneValidation {
                scene_number: result.scene_number.clone(),
                checks: vec![
                    SceneCheck {
                        check_name: "duration_consistency".to_string(),
                        status: if result.duration_matches {
                            CheckStatus::Pass
                        } else {
                            CheckStatus::Fail
                        },
                        details: if result.duration_matches {
                            "Scene duration matches timeline breakdown".to_string()
                        } else {
                            "Scene duration does not match timeline breakdown".to_string()
                        },
                    },
                    SceneCheck {
                        check_name: "technical_cues".to_string(),
                        status: if result.has_technical_cues {
                            CheckStatus::Pass
                        } else {
                            CheckStatus::Fail
                        },
                        details: if result.has_technical_cues {
                            "Technical cues present".to_string()
                        } else {
                            "No technical cues listed".to_string()
                        },
                    },
                ],
            })
            .collect();

        // Check 3: timeline total duration
        let mut timeline_validation = TimelineValidation::default();
        let total_result = self.timeline.check_total(&script.timeline);
        if !total_result.matches {
            timeline_validation
                .duration_issues
                .push(total_result.issue_string());
            issues.push(ValidationIssue::error(
                IssueCategory::Timeline,
                None,
                total_result.mismatch_description(),
                "Review the timeline breakdown against the declared total runtime.".to_string(),
            ));
        }

        // Checks 4 and 5: metadata runtime cross-check and field completeness
        let metadata_result = self
            .metadata
            .validate(&script.metadata, total_result.calculated_minutes);

        if let Some(mismatch) = &metadata_result.runtime_mismatch {
            issues.push(ValidationIssue::error(
                IssueCategory::Metadata,
                None,
                mismatch.description(),
                "Update the estimated runtime or correct the timeline breakdown.".to_string(),
            ));
        }
        if let Some(raw) = &metadata_result.unparseable_runtime {
            issues.push(ValidationIssue::warning(
                IssueCategory::Metadata,
                None,
                format!("Estimated runtime '{}' is not a valid H:MM:SS timecode", raw),
                "Re-run the parser or correct the estimated runtime field.".to_string(),
            ));
        }

        if metadata_result.zero_total_cast {
            issues.push(ValidationIssue::warning(
                IssueCategory::Fields,
                None,
                "Metadata field 'total_cast' is zero".to_string(),
                "Populate the cast count from the character breakdown.".to_string(),
            ));
        }
        for field in &metadata_result.missing_fields {
            issues.push(ValidationIssue::warning(
                IssueCategory::Fields,
                None,
                format!("Required metadata field '{}' is missing", field),
                "Re-run the parser or fill the field manually.".to_string(),
            ));
        }

        let metadata_validation = MetadataValidation {
            smpte_compliance: metadata_result.smpte_compliance,
            missing_fields: metadata_result.missing_fields,
            warnings: metadata_result.warnings,
        };

        // Check 6: setup-time feasibility
        let mut setup_concerns = self.technical.setup_concerns(&script.timeline);
        setup_concerns
            .sort_by(|a, b| compare_scene_numbers(&a.scene_number, &b.scene_number));
        for concern in &setup_concerns {
            issues.push(ValidationIssue::warning(
                IssueCategory::Technical,
                Some(concern.scene_number.clone()),
                concern.description(),
                "Review the setup time allocated before this scene.".to_string(),
            ));
        }

        // Check 7: pacing analysis (advisory only)
        let pacing = self.timeline.analyze_pacing(&scenes);
        timeline_validation.pacing_analysis = pacing.per_scene;
        timeline_validation.suggestions = pacing.suggestions;

        // Check 8: department conflicts (informational only)
        let department_conflicts: Vec<DepartmentConflict> = scenes
            .iter()
            .flat_map(|scene| self.technical.conflicts_for_scene(scene))
            .collect();
        let technical_validation = TechnicalValidation {
            department_conflicts,
            resource_requirements: self.technical.resource_requirements(&scenes),
        };

        // Aggregation
        let is_valid = !issues.iter().any(|i| i.issue_type == IssueType::Error);
        let valid_scenes = scene_validations.iter().filter(|s| s.all_passed()).count();

        let mut scenes_with_issues: BTreeSet<String> = failed_check_scenes;
        for issue in &issues {
            if let Some(scene_number) = &issue.scene_number {
                scenes_with_issues.insert(scene_number.clone());
            }
        }

        let summary = ValidationSummary {
            total_scenes: script.scenes.len(),
            valid_scenes,
            scenes_with_issues: scenes_with_issues.len(),
            total_issues: issues.len(),
        };

        debug!(
            "Validation complete: {} ({} issues, {}/{} valid scenes)",
            if is_valid { "PASSED" } else { "FAILED" },
            summary.total_issues,
            summary.valid_scenes,
            summary.total_scenes
        );

        ValidationReport {
            is_valid,
            issues,
            scene_validations,
            metadata_validation,
            timeline_validation,
            technical_validation,
            summary,
        }
    }

    /// Report for the degenerate empty-script case
    fn empty_script_report() -> ValidationReport {
        let issue = ValidationIssue::error(
            IssueCategory::Fields,
            None,
            "Script contains no scenes".to_string(),
            "Check the parsed script input for a non-empty scenes list.".to_string(),
        );

        ValidationReport {
            is_valid: false,
            issues: vec![issue],
            summary: ValidationSummary {
                total_scenes: 0,
                valid_scenes: 0,
                scenes_with_issues: 0,
                total_issues: 1,
            },
            ..Default::default()
        }
    }

    /// Access the active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl Default for ScriptValidator {
    fn default() -> Self {
        Self::new()
    }
}
