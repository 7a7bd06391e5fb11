/*!
 * In-memory representation of a parsed film script.
 *
 * A `ScriptRecord` is the result of an external parsing step: scenes with
 * their technical requirements, a day-of-production timeline breakdown, and
 * script-level metadata. The validation core borrows it read-only; nothing
 * here mutates after ingestion.
 */

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where a scene takes place
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    /// INT/EXT classification
    #[serde(rename = "type", default)]
    pub location_type: String,

    /// The named place, e.g. "WAREHOUSE"
    #[serde(default)]
    pub place: String,
}

/// A single line of dialogue within a scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dialogue {
    /// Speaking character
    pub character: String,

    /// The spoken line
    pub line: String,

    /// Optional parenthetical direction, e.g. "(whispering)"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parenthetical: Option<String>,
}

/// One shooting unit of the script
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Scene identifier, unique within a script
    pub scene_number: String,

    /// Location of the scene
    #[serde(default)]
    pub location: Location,

    /// Time of day, e.g. "NIGHT"
    #[serde(default)]
    pub time: String,

    /// Action/description text
    #[serde(default)]
    pub description: String,

    /// Duration as stated in the scene description
    #[serde(default)]
    pub duration_minutes: f64,

    /// Characters appearing in the scene
    #[serde(default)]
    pub main_characters: Vec<String>,

    /// Technical cues (camera moves, SFX, practical effects)
    #[serde(default)]
    pub technical_cues: Vec<String>,

    /// Per-department requirement lists, keyed by department name
    #[serde(default)]
    pub department_notes: BTreeMap<String, Vec<String>>,

    /// Dialogue lines in order
    #[serde(default)]
    pub dialogues: Vec<Dialogue>,

    /// Transitions out of the scene, e.g. "CUT TO:"
    #[serde(default)]
    pub transitions: Vec<String>,
}

/// One row of the timeline breakdown, referencing a scene by number
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Scene this row schedules
    pub scene_number: String,

    /// Wall-clock offset from production start, `H:MM:SS`
    #[serde(default)]
    pub start_time: String,

    /// Wall-clock offset from production start, `H:MM:SS`
    #[serde(default)]
    pub end_time: String,

    /// Allocated duration for the scene
    #[serde(default)]
    pub duration_minutes: f64,

    /// Technical complexity rating, 0 = trivial
    #[serde(default)]
    pub technical_complexity: u32,

    /// Setup time allocated before the scene rolls
    #[serde(default)]
    pub setup_time_seconds: f64,
}

/// The day-of-production timeline breakdown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    /// Per-scene rows, ordered by start time
    #[serde(default)]
    pub entries: Vec<TimelineEntry>,

    /// Declared total runtime of the script in minutes
    #[serde(default)]
    pub total_duration_minutes: f64,
}

impl Timeline {
    /// Sum of all entry durations in minutes
    pub fn calculated_duration_minutes(&self) -> f64 {
        self.entries.iter().map(|e| e.duration_minutes).sum()
    }

    /// All rows referencing the given scene number
    pub fn entries_for_scene(&self, scene_number: &str) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|e| e.scene_number == scene_number)
            .collect()
    }
}

/// Script-level metadata produced by the external parser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptMetadata {
    /// Number of cast members
    #[serde(default)]
    pub total_cast: u32,

    /// Declared runtime as an `H:MM:SS` string
    #[serde(default)]
    pub estimated_runtime: String,

    /// Whether timecodes conform to the SMPTE standard (opaque input)
    #[serde(default)]
    pub smpte_compliance: bool,

    /// Required fields the parser could not populate
    #[serde(default)]
    pub missing_fields: Vec<String>,
}

/// A complete parsed script: scenes, timeline breakdown and metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptRecord {
    /// Scenes in script order
    #[serde(default)]
    pub scenes: Vec<Scene>,

    /// Timeline breakdown
    #[serde(default)]
    pub timeline: Timeline,

    /// Script-level metadata
    #[serde(default)]
    pub metadata: ScriptMetadata,
}

impl ScriptRecord {
    /// Scenes in ascending scene_number order.
    ///
    /// Numeric scene numbers compare as integers ("2" before "10");
    /// anything non-numeric falls back to lexicographic order after the
    /// numeric block.
    pub fn scenes_sorted(&self) -> Vec<&Scene> {
        let mut scenes: Vec<&Scene> = self.scenes.iter().collect();
        scenes.sort_by(|a, b| compare_scene_numbers(&a.scene_number, &b.scene_number));
        scenes
    }
}

/// Numeric-aware ordering for scene numbers
pub fn compare_scene_numbers(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(na), Ok(nb)) => na.cmp(&nb),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
