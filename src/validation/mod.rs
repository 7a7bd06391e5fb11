/*!
 * Validation module for parsed film scripts.
 *
 * This module provides the rule checks that turn a `ScriptRecord` into a
 * `ValidationReport`:
 * - Continuity (scene durations vs timeline breakdown, technical cues)
 * - Timeline totals and pacing classification
 * - Technical feasibility (setup windows, department conflicts)
 * - Metadata cross-checks (runtime, field completeness)
 *
 * # Architecture
 *
 * - `continuity`: per-scene duration and cue checks
 * - `timeline`: total duration reconciliation and pacing
 * - `technical`: setup feasibility, department conflicts, resources
 * - `metadata`: runtime cross-check and field completeness
 * - `service`: orchestrates all checks and aggregates the report
 * - `report`: plain-text rendering of a report
 */

pub mod continuity;
pub mod metadata;
pub mod report;
pub mod service;
pub mod technical;
pub mod timeline;

// Re-export main types
pub use report::ReportRenderer;
pub use service::{
    IssueCategory, IssueType, ScriptValidator, ValidationConfig, ValidationIssue,
    ValidationReport,
};
pub use technical::{DepartmentConflict, InterferingPair};
pub use timeline::Pacing;
