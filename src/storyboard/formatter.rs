/*!
 * Local storyboard formatter.
 *
 * Assembles the pipeline stages into display-ready panels. Prompts and
 * images are matched to scenes by scene number; a scene with a missing or
 * failed stage still gets a panel, with the failure recorded on it.
 */

use async_trait::async_trait;
use chrono::Local;
use log::debug;

use crate::errors::ProviderError;
use crate::providers::StoryboardFormatter;

use super::model::{SceneImage, ScenePrompt, Storyboard, StoryboardFrame, StoryboardScene};

/// Formatter that assembles panels locally, without an external service
#[derive(Debug, Default)]
pub struct LayoutFormatter;

impl LayoutFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StoryboardFormatter for LayoutFormatter {
    async fn format_storyboard(
        &self,
        scenes: &[StoryboardScene],
        prompts: &[ScenePrompt],
        images: &[SceneImage],
    ) -> Result<Storyboard, ProviderError> {
        let frames: Vec<StoryboardFrame> = scenes
            .iter()
            .map(|scene| {
                let prompt = prompts
                    .iter()
                    .find(|p| p.scene_number == scene.scene_number);
                let image = images
                    .iter()
                    .find(|i| i.scene_number == scene.scene_number);

                let error = image
                    .and_then(|i| i.error.clone())
                    .or_else(|| prompt.and_then(|p| p.error.clone()));

                StoryboardFrame {
                    scene_number: scene.scene_number.clone(),
                    heading: scene.heading.clone(),
                    description: scene.description.clone(),
                    shot_type: scene.technical_params.shot_type.clone(),
                    mood: scene.technical_params.mood.clone(),
                    prompt: prompt.and_then(|p| p.prompt.clone()),
                    image_b64: image.and_then(|i| i.image_b64.clone()),
                    error,
                    annotations: vec![],
                }
            })
            .collect();

        debug!("Assembled storyboard with {} panels", frames.len());

        Ok(Storyboard {
            scenes: frames,
            generated_at: Local::now().format("%Y%m%d_%H%M%S").to_string(),
        })
    }
}
