/*!
 * Timeline-level validation: total duration reconciliation and pacing.
 *
 * The declared total runtime must match the summed timeline rows within a
 * configurable epsilon (exact match by default). Pacing is advisory only:
 * scenes are classified SLOW/MEDIUM/FAST from their stated duration and a
 * script dominated by FAST scenes gets a fixed suggestion appended.
 */

use serde::{Deserialize, Serialize};

use crate::script::{Scene, Timeline};
use crate::timecode::format_minutes;

/// Suggestion appended when at least half the scenes classify as FAST
pub const FAST_PACING_SUGGESTION: &str =
    "Script may be too fast-paced. Consider adding more character development scenes.";

/// Qualitative scene tempo derived from duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pacing {
    /// Duration below the fast threshold
    Fast,
    /// Duration between the thresholds
    Medium,
    /// Duration above the slow threshold
    Slow,
}

impl std::fmt::Display for Pacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pacing::Fast => write!(f, "FAST"),
            Pacing::Medium => write!(f, "MEDIUM"),
            Pacing::Slow => write!(f, "SLOW"),
        }
    }
}

/// Configuration for the timeline validator
#[derive(Debug, Clone)]
pub struct TimelineValidatorConfig {
    /// Allowed difference in minutes between declared and calculated totals
    pub epsilon_minutes: f64,
    /// Durations strictly below this classify as FAST
    pub fast_max_minutes: f64,
    /// Durations strictly above this classify as SLOW
    pub slow_min_minutes: f64,
    /// Fraction of FAST scenes that triggers the pacing suggestion
    pub fast_pacing_ratio: f64,
}

impl Default for TimelineValidatorConfig {
    fn default() -> Self {
        Self {
            epsilon_minutes: 0.0,
            fast_max_minutes: 2.0,
            slow_min_minutes: 4.0,
            fast_pacing_ratio: 0.5,
        }
    }
}

/// Result of reconciling the declared total against the timeline rows
#[derive(Debug, Clone)]
pub struct TotalDurationResult {
    /// Declared total runtime in minutes
    pub reported_minutes: f64,
    /// Summed timeline row durations in minutes
    pub calculated_minutes: f64,
    /// Whether the two agree within epsilon
    pub matches: bool,
}

impl TotalDurationResult {
    /// The `reported X vs calculated Y` string persisted in the report
    pub fn issue_string(&self) -> String {
        format!(
            "reported {} vs calculated {}",
            format_minutes(self.reported_minutes),
            format_minutes(self.calculated_minutes)
        )
    }

    /// Human-readable description for the report-level issue
    pub fn mismatch_description(&self) -> String {
        format!(
            "Timeline breakdown totals {} minutes but the declared total runtime is {} minutes",
            self.calculated_minutes, self.reported_minutes
        )
    }
}

/// Pacing classification for one scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenePacing {
    /// Scene this classification describes
    pub scene_number: String,
    /// Classified tempo
    pub pacing: Pacing,
}

/// Advisory pacing analysis over the whole script
#[derive(Debug, Clone, Default)]
pub struct PacingAnalysis {
    /// Per-scene classifications, in ascending scene order
    pub per_scene: Vec<ScenePacing>,
    /// Suggestions derived from the distribution
    pub suggestions: Vec<String>,
}

/// Validator for timeline totals and pacing
#[derive(Debug, Default)]
pub struct TimelineValidator {
    config: TimelineValidatorConfig,
}

impl TimelineValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self {
            config: TimelineValidatorConfig::default(),
        }
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: TimelineValidatorConfig) -> Self {
        Self { config }
    }

    /// Reconcile the declared total runtime against the summed rows
    pub fn check_total(&self, timeline: &Timeline) -> TotalDurationResult {
        let reported = timeline.total_duration_minutes;
        let calculated = timeline.calculated_duration_minutes();
        // Epsilon 0.0 still tolerates float noise from summation
        let matches = (reported - calculated).abs() <= self.config.epsilon_minutes + f64::EPSILON;

        TotalDurationResult {
            reported_minutes: reported,
            calculated_minutes: calculated,
            matches,
        }
    }

    /// Classify one duration
    pub fn classify(&self, duration_minutes: f64) -> Pacing {
        if duration_minutes < self.config.fast_max_minutes {
            Pacing::Fast
        } else if duration_minutes <= self.config.slow_min_minutes {
            Pacing::Medium
        } else {
            Pacing::Slow
        }
    }

    /// Classify every scene and derive distribution-level suggestions.
    ///
    /// `scenes` must already be in ascending scene_number order.
    pub fn analyze_pacing(&self, scenes: &[&Scene]) -> PacingAnalysis {
        let per_scene: Vec<ScenePacing> = scenes
            .iter()
            .map(|scene| ScenePacing {
                scene_number: scene.scene_number.clone(),
                pacing: self.classify(scene.duration_minutes),
            })
            .collect();

        let mut suggestions = Vec::new();
        if !per_scene.is_empty() {
            let fast_count = per_scene
                .iter()
                .filter(|p| p.pacing == Pacing::Fast)
                .count();
            let fast_fraction = fast_count as f64 / per_scene.len() as f64;
            if fast_fraction >= self.config.fast_pacing_ratio {
                suggestions.push(FAST_PACING_SUGGESTION.to_string());
            }
        }

        PacingAnalysis {
            per_scene,
            suggestions,
        }
    }
}
