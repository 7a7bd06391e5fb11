/*!
 * JSON artifact persistence.
 *
 * Three artifact shapes are handled:
 * - the parsed-script file produced by the external parser
 *   (`{ parsed_data: {...}, processing_status: {...}, statistics: {...} }`)
 * - the validation result file
 *   (`{ is_valid, validation_report, formatted_text }`)
 * - timestamped storyboard files under a configured directory
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::app_config::StorageConfig;
use crate::script::ScriptRecord;
use crate::storyboard::model::Storyboard;
use crate::validation::ValidationReport;

/// Ensure a directory and its parents exist
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
    }
    Ok(())
}

/// On-disk shape of the validation result artifact.
///
/// `is_valid` and `formatted_text` are duplicated at the top level for
/// consumers that only read the envelope; kept for backward compatibility.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResultFile {
    /// Overall verdict, duplicated from the report
    pub is_valid: bool,
    /// The full report with `formatted_text` embedded
    pub validation_report: Value,
    /// Rendered report text, duplicated from the report
    pub formatted_text: String,
}

impl ValidationResultFile {
    /// Build the artifact from a report and its rendered text
    pub fn new(report: &ValidationReport, formatted_text: &str) -> Result<Self> {
        let mut report_value =
            serde_json::to_value(report).context("Failed to serialize validation report")?;
        report_value
            .as_object_mut()
            .ok_or_else(|| anyhow!("Validation report did not serialize to an object"))?
            .insert(
                "formatted_text".to_string(),
                Value::String(formatted_text.to_string()),
            );

        Ok(Self {
            is_valid: report.is_valid,
            validation_report: report_value,
            formatted_text: formatted_text.to_string(),
        })
    }
}

/// Read a parsed-script artifact into a `ScriptRecord`.
///
/// Accepts either the full envelope with a `parsed_data` object or a bare
/// script record.
pub fn read_script_record<P: AsRef<Path>>(path: P) -> Result<ScriptRecord> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {:?}", path))?;

    let record_value = match value.get("parsed_data") {
        Some(parsed_data) => parsed_data.clone(),
        None => value,
    };

    serde_json::from_value(record_value)
        .with_context(|| format!("Malformed script record in {:?}", path))
}

/// Write the validation result artifact
pub fn write_validation_result<P: AsRef<Path>>(
    path: P,
    report: &ValidationReport,
    formatted_text: &str,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let artifact = ValidationResultFile::new(report, formatted_text)?;
    let content = serde_json::to_string_pretty(&artifact)
        .context("Failed to serialize validation result")?;
    fs::write(path, content).with_context(|| format!("Failed to write to file: {:?}", path))?;

    info!("Saved validation result to {:?}", path);
    Ok(())
}

/// Write the validation result under the configured validation directory.
///
/// Returns the path written.
pub fn write_validation_result_in(
    config: &StorageConfig,
    file_name: &str,
    report: &ValidationReport,
    formatted_text: &str,
) -> Result<PathBuf> {
    let path = Path::new(&config.validation_dir).join(file_name);
    write_validation_result(&path, report, formatted_text)?;
    Ok(path)
}

/// Write a storyboard to a timestamped file under `dir`.
///
/// Returns the path written, e.g. `dir/storyboard_20260830_141502.json`.
pub fn write_storyboard<P: AsRef<Path>>(dir: P, storyboard: &Storyboard) -> Result<PathBuf> {
    let dir = dir.as_ref();
    ensure_dir(dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("storyboard_{}.json", timestamp));

    let content =
        serde_json::to_string_pretty(storyboard).context("Failed to serialize storyboard")?;
    fs::write(&path, content).with_context(|| format!("Failed to write to file: {:?}", path))?;

    info!("Saved storyboard to {:?}", path);
    Ok(path)
}
