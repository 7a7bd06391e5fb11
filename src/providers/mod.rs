/*!
 * Provider implementations for the generative collaborators.
 *
 * The storyboard coordinator depends on three seams, each an async trait:
 * - `PromptGenerator`: scene descriptions -> image prompts
 * - `ImageGenerator`: image prompts -> rendered panels
 * - `StoryboardFormatter`: scenes + prompts + images -> assembled storyboard
 *
 * `openai` implements the first two against the OpenAI API; the formatter
 * is a local implementation in the storyboard module. `mock` provides
 * configurable stand-ins for tests.
 */

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::storyboard::model::{SceneImage, ScenePrompt, Storyboard, StoryboardScene};

/// Generates image prompts from analyzed scenes.
///
/// Implementations report per-scene failures inside the returned entries
/// (the `error` field) and reserve `Err` for failures affecting the whole
/// batch, such as authentication errors.
#[async_trait]
pub trait PromptGenerator: Send + Sync {
    /// Generate one prompt per scene, preserving input order
    async fn generate_prompts(
        &self,
        scenes: &[StoryboardScene],
    ) -> Result<Vec<ScenePrompt>, ProviderError>;
}

/// Generates storyboard images from prompts
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image per prompt, preserving input order. Prompts
    /// carrying an error are passed through without an API call.
    async fn generate_images(
        &self,
        prompts: &[ScenePrompt],
    ) -> Result<Vec<SceneImage>, ProviderError>;
}

/// Assembles the final storyboard from the pipeline stages
#[async_trait]
pub trait StoryboardFormatter: Send + Sync {
    /// Combine scenes, prompts and images into display-ready panels
    async fn format_storyboard(
        &self,
        scenes: &[StoryboardScene],
        prompts: &[ScenePrompt],
        images: &[SceneImage],
    ) -> Result<Storyboard, ProviderError>;
}

pub mod mock;
pub mod openai;
