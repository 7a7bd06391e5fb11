/*!
 * Storyboard generation pipeline.
 *
 * # Architecture
 *
 * - `model`: data types flowing through the pipeline
 * - `shots`: keyword-driven shot type and mood analysis
 * - `coordinator`: sequences the generative collaborators
 * - `formatter`: local assembly of the final storyboard
 */

pub mod coordinator;
pub mod formatter;
pub mod model;
pub mod shots;

// Re-export main types
pub use coordinator::StoryboardCoordinator;
pub use formatter::LayoutFormatter;
pub use model::{ShotSettings, Storyboard, StoryboardOutcome};
pub use shots::{ShotAnalyzer, ShotAnalyzerConfig};
