/*!
 * Storyboard pipeline data types.
 *
 * These are the values flowing between the coordinator and its
 * collaborators: analyzed scenes in, prompts and images through the
 * middle, an assembled `Storyboard` out.
 */

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Technical parameters attached to a scene before prompt generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalParams {
    /// Shot type, e.g. "ESTABLISHING" or the default "MS"
    pub shot_type: String,
    /// Visual style passed to the image model
    pub style: String,
    /// Scene mood derived from the description
    pub mood: String,
}

impl Default for TechnicalParams {
    fn default() -> Self {
        Self {
            shot_type: "MS".to_string(),
            style: "realistic".to_string(),
            mood: "neutral".to_string(),
        }
    }
}

/// A scene prepared for storyboard generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryboardScene {
    /// Scene identifier
    pub scene_number: String,
    /// Slug-line style heading, e.g. "INT. WAREHOUSE - NIGHT"
    pub heading: String,
    /// Action/description text the prompt is built from
    pub description: String,
    /// Analyzed or overridden technical parameters
    pub technical_params: TechnicalParams,
}

/// A generated image prompt for one scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenePrompt {
    /// Scene identifier
    pub scene_number: String,
    /// Scene heading carried through for display
    pub heading: String,
    /// The generated prompt, absent when generation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Error message when generation failed for this scene
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A generated image for one scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneImage {
    /// Scene identifier
    pub scene_number: String,
    /// Base64-encoded image payload, absent when generation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_b64: Option<String>,
    /// Error message when generation failed for this scene
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One assembled storyboard panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryboardFrame {
    /// Scene identifier
    pub scene_number: String,
    /// Scene heading
    pub heading: String,
    /// Scene description
    pub description: String,
    /// Shot type used for the panel
    pub shot_type: String,
    /// Mood used for the panel
    pub mood: String,
    /// The prompt the image was generated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Base64-encoded image payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_b64: Option<String>,
    /// Error recorded if any stage failed for this scene
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Free-text production annotations
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// A complete storyboard in display order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Storyboard {
    /// Panels in display order
    pub scenes: Vec<StoryboardFrame>,
    /// Generation timestamp, `YYYYMMDD_HHMMSS`
    pub generated_at: String,
}

impl Storyboard {
    /// Append an annotation to the panel for the given scene.
    ///
    /// Returns false when no panel matches the scene number.
    pub fn add_annotation(&mut self, scene_number: &str, annotation: &str) -> bool {
        match self
            .scenes
            .iter_mut()
            .find(|frame| frame.scene_number == scene_number)
        {
            Some(frame) => {
                frame.annotations.push(annotation.to_string());
                true
            }
            None => false,
        }
    }

    /// Reorder panels to match the given scene number sequence.
    ///
    /// Panels not named in `order` keep their relative position after the
    /// named ones; unknown scene numbers are ignored.
    pub fn reorder(&mut self, order: &[String]) {
        let mut reordered: Vec<StoryboardFrame> = Vec::with_capacity(self.scenes.len());
        for scene_number in order {
            if let Some(position) = self
                .scenes
                .iter()
                .position(|frame| &frame.scene_number == scene_number)
            {
                reordered.push(self.scenes.remove(position));
            }
        }
        reordered.append(&mut self.scenes);
        self.scenes = reordered;
    }
}

/// Per-scene override of analyzed technical parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneShotOverride {
    /// Override shot type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,
    /// Override style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Override mood
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// Manual shot settings applied on top of scene analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShotSettings {
    /// Global shot type override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_shot_type: Option<String>,
    /// Global style override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Global mood override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Scene-specific overrides, keyed by scene number. These win over
    /// the global overrides.
    #[serde(default)]
    pub scene_settings: BTreeMap<String, SceneShotOverride>,
}

/// Outcome of a storyboard generation run.
///
/// Collaborator failures are caught and returned as `Failed` rather than
/// propagated, so callers always get a structured result.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StoryboardOutcome {
    /// The pipeline ran to completion
    Completed {
        /// The assembled storyboard
        storyboard: Storyboard,
        /// Where the storyboard JSON was persisted, if persistence is
        /// configured
        saved_path: Option<PathBuf>,
    },
    /// The pipeline failed at some stage
    Failed {
        /// What went wrong
        error: String,
    },
}
