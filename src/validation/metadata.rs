/*!
 * Metadata validation: runtime cross-check and field completeness.
 *
 * The declared `estimated_runtime` must agree with the total calculated
 * from the timeline rows. SMPTE compliance is an opaque boolean input that
 * is carried through to the report unchanged.
 */

use crate::script::ScriptMetadata;
use crate::timecode::{format_minutes, parse_timecode};

/// Metadata check outcome, consumed by the validation service
#[derive(Debug, Clone, Default)]
pub struct MetadataCheckResult {
    /// SMPTE compliance flag, passed through
    pub smpte_compliance: bool,
    /// Missing required fields, passed through from the parser
    pub missing_fields: Vec<String>,
    /// Warning strings for the report's metadata section
    pub warnings: Vec<String>,
    /// Declared vs calculated runtime, present when both are known
    /// and disagree
    pub runtime_mismatch: Option<RuntimeMismatch>,
    /// The raw string when `estimated_runtime` was not a valid timecode
    pub unparseable_runtime: Option<String>,
    /// Whether `total_cast` was zero
    pub zero_total_cast: bool,
}

/// Declared runtime disagreeing with the calculated timeline total
#[derive(Debug, Clone)]
pub struct RuntimeMismatch {
    /// Declared runtime in minutes
    pub reported_minutes: f64,
    /// Calculated timeline total in minutes
    pub calculated_minutes: f64,
}

impl RuntimeMismatch {
    /// Human-readable description for the report-level issue
    pub fn description(&self) -> String {
        format!(
            "Estimated runtime {} does not match the calculated timeline total {}",
            format_minutes(self.reported_minutes),
            format_minutes(self.calculated_minutes)
        )
    }
}

/// Validator for script-level metadata
#[derive(Debug, Default)]
pub struct MetadataValidator;

impl MetadataValidator {
    /// Create a new metadata validator
    pub fn new() -> Self {
        Self
    }

    /// Check metadata against the calculated timeline total.
    ///
    /// Malformed values never fault: an unparseable runtime is reported
    /// as a warning and the cross-check is skipped for it.
    pub fn validate(
        &self,
        metadata: &ScriptMetadata,
        calculated_minutes: f64,
    ) -> MetadataCheckResult {
        let mut result = MetadataCheckResult {
            smpte_compliance: metadata.smpte_compliance,
            missing_fields: metadata.missing_fields.clone(),
            zero_total_cast: metadata.total_cast == 0,
            ..Default::default()
        };

        match parse_timecode(&metadata.estimated_runtime) {
            Some(reported_minutes) => {
                if (reported_minutes - calculated_minutes).abs() > f64::EPSILON {
                    let mismatch = RuntimeMismatch {
                        reported_minutes,
                        calculated_minutes,
                    };
                    result.warnings.push(mismatch.description());
                    result.runtime_mismatch = Some(mismatch);
                }
            }
            None => {
                result.warnings.push(format!(
                    "Estimated runtime '{}' is not a valid H:MM:SS timecode",
                    metadata.estimated_runtime
                ));
                result.unparseable_runtime = Some(metadata.estimated_runtime.clone());
            }
        }

        result
    }
}
