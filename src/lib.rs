/*!
 * # Scriptboard - Script Validation and Storyboard Generation
 *
 * A Rust library for validating parsed film scripts and generating
 * AI-assisted storyboards from them.
 *
 * ## Features
 *
 * - Validate parsed scripts against their timeline breakdown:
 *   - Scene duration consistency
 *   - Technical cue presence
 *   - Timeline total duration
 *   - Metadata runtime cross-check and field completeness
 *   - Setup-time feasibility and pacing analysis
 *   - Department conflict detection
 * - Render validation reports as fixed-width formatted text
 * - Generate storyboards through pluggable prompt/image providers
 * - Persist validation results and storyboards as JSON artifacts
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `script`: Parsed script data model
 * - `timecode`: H:MM:SS timecode formatting and parsing
 * - `validation`: Script validation rules and reporting:
 *   - `validation::continuity`: Per-scene duration and cue checks
 *   - `validation::timeline`: Total duration and pacing analysis
 *   - `validation::technical`: Setup feasibility and department conflicts
 *   - `validation::metadata`: Metadata completeness and runtime cross-check
 *   - `validation::service`: Orchestration into a single report
 *   - `validation::report`: Formatted text rendering and parsing
 * - `storyboard`: Storyboard generation pipeline:
 *   - `storyboard::coordinator`: Stage sequencing
 *   - `storyboard::shots`: Shot type and mood analysis
 *   - `storyboard::formatter`: Panel assembly
 * - `providers`: Client implementations for generative providers:
 *   - `providers::openai`: OpenAI API client
 *   - `providers::mock`: Test doubles
 * - `storage`: JSON artifact persistence
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod providers;
pub mod script;
pub mod storage;
pub mod storyboard;
pub mod timecode;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, StoryboardError};
pub use script::ScriptRecord;
pub use storyboard::{StoryboardCoordinator, StoryboardOutcome};
pub use validation::{ReportRenderer, ScriptValidator, ValidationConfig, ValidationReport};
