/*!
 * Per-scene continuity checks.
 *
 * Two checks run on every scene:
 * - Duration consistency: the duration stated in the scene description must
 *   equal the summed duration of the timeline rows referencing the scene.
 * - Technical cues present: a scene with an empty cue list is flagged.
 */

use crate::script::{Scene, Timeline};

/// Fixed suggestion attached to every duration mismatch
pub const DURATION_SUGGESTION: &str =
    "Adjust scene duration in timeline breakdown or description.";

/// Configuration for the continuity validator
#[derive(Debug, Clone)]
pub struct ContinuityValidatorConfig {
    /// Whether a missing technical cue list escalates to a report-level
    /// warning, in addition to failing the per-scene check
    pub escalate_missing_cues: bool,
}

impl Default for ContinuityValidatorConfig {
    fn default() -> Self {
        Self {
            escalate_missing_cues: true,
        }
    }
}

/// Continuity result for one scene
#[derive(Debug, Clone)]
pub struct SceneContinuityResult {
    /// Scene this result describes
    pub scene_number: String,
    /// Duration stated in the scene description
    pub stated_minutes: f64,
    /// Summed duration of the timeline rows for this scene
    pub timeline_minutes: f64,
    /// Whether the two durations agree
    pub duration_matches: bool,
    /// Whether the scene lists at least one technical cue
    pub has_technical_cues: bool,
}

impl SceneContinuityResult {
    /// Human-readable description of a duration mismatch
    pub fn mismatch_description(&self) -> String {
        format!(
            "Scene {} duration mismatch: description states {} minutes, timeline breakdown totals {} minutes",
            self.scene_number, self.stated_minutes, self.timeline_minutes
        )
    }
}

/// Validator for per-scene continuity
#[derive(Debug, Default)]
pub struct ContinuityValidator {
    config: ContinuityValidatorConfig,
}

impl ContinuityValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self {
            config: ContinuityValidatorConfig::default(),
        }
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: ContinuityValidatorConfig) -> Self {
        Self { config }
    }

    /// Whether missing cues escalate beyond the per-scene check
    pub fn escalates_missing_cues(&self) -> bool {
        self.config.escalate_missing_cues
    }

    /// Check one scene against the timeline breakdown
    pub fn validate_scene(&self, scene: &Scene, timeline: &Timeline) -> SceneContinuityResult {
        let timeline_minutes: f64 = timeline
            .entries_for_scene(&scene.scene_number)
            .iter()
            .map(|e| e.duration_minutes)
            .sum();

        SceneContinuityResult {
            scene_number: scene.scene_number.clone(),
            stated_minutes: scene.duration_minutes,
            timeline_minutes,
            duration_matches: (scene.duration_minutes - timeline_minutes).abs() <= f64::EPSILON,
            has_technical_cues: !scene.technical_cues.is_empty(),
        }
    }
}
