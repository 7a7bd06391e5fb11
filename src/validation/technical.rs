/*!
 * Technical validation: setup-time feasibility, department conflicts and
 * resource requirement aggregation.
 *
 * Department conflict detection is a coarse heuristic driven by a
 * configurable table of interfering department pairs. Conflicts and
 * resource requirements are informational only and never raise issues.
 */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::script::{Scene, Timeline};

/// Default conflict note for the props/camera pair
pub const PROPS_CAMERA_NOTE: &str = "Props and camera movement may interfere";

/// Minimum setup window in seconds for a technically complex scene
const DEFAULT_MIN_SETUP_SECONDS: f64 = 30.0;

/// Complexity rating at or above which the setup window is checked
const DEFAULT_COMPLEXITY_THRESHOLD: u32 = 2;

/// An unordered pair of departments whose requirements may interfere on set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterferingPair {
    /// The two department names, order-insensitive
    pub departments: [String; 2],
    /// Note recorded when both departments have requirements in a scene
    pub note: String,
}

impl InterferingPair {
    /// Create a pair from two department names and a conflict note
    pub fn new(a: &str, b: &str, note: &str) -> Self {
        Self {
            departments: [a.to_string(), b.to_string()],
            note: note.to_string(),
        }
    }

    /// Whether a scene has non-empty requirement lists for both departments
    pub fn applies_to(&self, scene: &Scene) -> bool {
        self.departments.iter().all(|department| {
            scene
                .department_notes
                .get(department)
                .is_some_and(|requirements| !requirements.is_empty())
        })
    }
}

/// Configuration for the technical validator
#[derive(Debug, Clone)]
pub struct TechnicalValidatorConfig {
    /// Minimum setup seconds for complex scenes
    pub min_setup_seconds: f64,
    /// Complexity rating that triggers the setup check
    pub complexity_threshold: u32,
    /// Department pairs treated as interfering
    pub interfering_pairs: Vec<InterferingPair>,
}

impl Default for TechnicalValidatorConfig {
    fn default() -> Self {
        Self {
            min_setup_seconds: DEFAULT_MIN_SETUP_SECONDS,
            complexity_threshold: DEFAULT_COMPLEXITY_THRESHOLD,
            interfering_pairs: vec![InterferingPair::new("props", "camera", PROPS_CAMERA_NOTE)],
        }
    }
}

/// A flagged department conflict, keyed by scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentConflict {
    /// Scene where the conflict was detected
    pub scene_number: String,
    /// The interfering departments
    pub departments: [String; 2],
    /// The configured conflict note
    pub note: String,
}

/// A scene whose setup window looks too short for its complexity
#[derive(Debug, Clone)]
pub struct SetupConcern {
    /// Scene the timeline row schedules
    pub scene_number: String,
    /// Complexity rating of the row
    pub technical_complexity: u32,
    /// Allocated setup seconds
    pub setup_time_seconds: f64,
}

impl SetupConcern {
    /// Human-readable description for the report-level warning
    pub fn description(&self) -> String {
        format!(
            "Scene {} has technical complexity {} but only {} seconds of setup time",
            self.scene_number, self.technical_complexity, self.setup_time_seconds
        )
    }
}

/// Validator for technical feasibility and department interactions
#[derive(Debug, Default)]
pub struct TechnicalValidator {
    config: TechnicalValidatorConfig,
}

impl TechnicalValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self {
            config: TechnicalValidatorConfig::default(),
        }
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: TechnicalValidatorConfig) -> Self {
        Self { config }
    }

    /// Timeline rows whose setup window is too short for their complexity.
    ///
    /// Rows are returned in timeline order; the service re-sorts by scene
    /// number before emitting issues.
    pub fn setup_concerns(&self, timeline: &Timeline) -> Vec<SetupConcern> {
        timeline
            .entries
            .iter()
            .filter(|entry| {
                entry.technical_complexity >= self.config.complexity_threshold
                    && entry.setup_time_seconds < self.config.min_setup_seconds
            })
            .map(|entry| SetupConcern {
                scene_number: entry.scene_number.clone(),
                technical_complexity: entry.technical_complexity,
                setup_time_seconds: entry.setup_time_seconds,
            })
            .collect()
    }

    /// Conflicts for one scene, one entry per matching configured pair
    pub fn conflicts_for_scene(&self, scene: &Scene) -> Vec<DepartmentConflict> {
        self.config
            .interfering_pairs
            .iter()
            .filter(|pair| pair.applies_to(scene))
            .map(|pair| DepartmentConflict {
                scene_number: scene.scene_number.clone(),
                departments: pair.departments.clone(),
                note: pair.note.clone(),
            })
            .collect()
    }

    /// Total requirement counts per department across all scenes
    pub fn resource_requirements(&self, scenes: &[&Scene]) -> BTreeMap<String, usize> {
        let mut totals: BTreeMap<String, usize> = BTreeMap::new();
        for scene in scenes {
            for (department, requirements) in &scene.department_notes {
                *totals.entry(department.clone()).or_insert(0) += requirements.len();
            }
        }
        totals
    }
}
