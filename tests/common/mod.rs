/*!
 * Common test utilities for the scriptboard test suite
 */

use std::fs;
use std::path::PathBuf;
use std::sync::Once;

use anyhow::Result;
use tempfile::TempDir;

use scriptboard::script::{Scene, ScriptMetadata, ScriptRecord, Timeline, TimelineEntry};

static LOGGER: Once = Once::new();

/// Initializes test logging once for the whole suite
pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Scene with a stated duration and one technical cue
pub fn scene(number: &str, duration_minutes: f64) -> Scene {
    Scene {
        scene_number: number.to_string(),
        duration_minutes,
        technical_cues: vec!["STEADICAM".to_string()],
        ..Default::default()
    }
}

/// Timeline entry with an uncontroversial setup window
pub fn entry(number: &str, duration_minutes: f64) -> TimelineEntry {
    TimelineEntry {
        scene_number: number.to_string(),
        duration_minutes,
        technical_complexity: 1,
        setup_time_seconds: 60.0,
        ..Default::default()
    }
}

/// A script whose scenes, timeline and metadata all agree.
///
/// Six scenes totalling 18 minutes on both sides, runtime 0:18:00.
pub fn consistent_script() -> ScriptRecord {
    let durations = [2.0, 3.0, 3.0, 3.0, 4.0, 3.0];
    ScriptRecord {
        scenes: durations
            .iter()
            .enumerate()
            .map(|(i, d)| scene(&(i + 1).to_string(), *d))
            .collect(),
        timeline: Timeline {
            entries: durations
                .iter()
                .enumerate()
                .map(|(i, d)| entry(&(i + 1).to_string(), *d))
                .collect(),
            total_duration_minutes: 18.0,
        },
        metadata: ScriptMetadata {
            total_cast: 5,
            estimated_runtime: "0:18:00".to_string(),
            smpte_compliance: true,
            missing_fields: vec![],
        },
    }
}

/// A script riddled with inconsistencies.
///
/// Five scenes stating {3, 2, 5, 3, 2} minutes against one-minute timeline
/// rows, a declared total of 15 minutes, a matching estimated runtime, a
/// zero cast count and one rushed high-complexity setup. Validation finds
/// exactly nine issues.
pub fn inconsistent_script() -> ScriptRecord {
    let stated = [3.0, 2.0, 5.0, 3.0, 2.0];
    let mut entries: Vec<TimelineEntry> = stated
        .iter()
        .enumerate()
        .map(|(i, _)| entry(&(i + 1).to_string(), 1.0))
        .collect();
    entries[2].technical_complexity = 3;
    entries[2].setup_time_seconds = 15.0;

    ScriptRecord {
        scenes: stated
            .iter()
            .enumerate()
            .map(|(i, d)| scene(&(i + 1).to_string(), *d))
            .collect(),
        timeline: Timeline {
            entries,
            total_duration_minutes: 15.0,
        },
        metadata: ScriptMetadata {
            total_cast: 0,
            estimated_runtime: "0:15:00".to_string(),
            smpte_compliance: true,
            missing_fields: vec![],
        },
    }
}
