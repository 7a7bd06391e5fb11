/*!
 * Mock collaborator implementations for testing.
 *
 * The mocks simulate different behaviors:
 * - `working()` - always succeeds with deterministic output
 * - `failing()` - always fails with a provider error
 * - `empty()` - succeeds but returns no entries
 * - `per_scene_errors()` - succeeds at the batch level but marks every
 *   entry as failed, exercising the partial-failure path
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::storyboard::model::{SceneImage, ScenePrompt, StoryboardScene};

use super::{ImageGenerator, PromptGenerator};

/// Behavior mode for the mock collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Always succeeds with deterministic output
    Working,
    /// Always fails with a provider error
    Failing,
    /// Succeeds but returns an empty result
    Empty,
    /// Succeeds at batch level, every entry carries an error
    PerSceneErrors,
}

/// Mock prompt generator
#[derive(Debug)]
pub struct MockPromptGenerator {
    behavior: MockBehavior,
    request_count: Arc<AtomicUsize>,
}

impl MockPromptGenerator {
    /// Create a mock with the given behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns no prompts
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock whose every entry carries a per-scene error
    pub fn per_scene_errors() -> Self {
        Self::new(MockBehavior::PerSceneErrors)
    }

    /// Number of calls made to this mock
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Shared handle to the request counter
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.request_count)
    }
}

#[async_trait]
impl PromptGenerator for MockPromptGenerator {
    async fn generate_prompts(
        &self,
        scenes: &[StoryboardScene],
    ) -> Result<Vec<ScenePrompt>, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(scenes
                .iter()
                .map(|scene| ScenePrompt {
                    scene_number: scene.scene_number.clone(),
                    heading: scene.heading.clone(),
                    prompt: Some(format!(
                        "[PROMPT] {} shot of: {}",
                        scene.technical_params.shot_type, scene.description
                    )),
                    error: None,
                })
                .collect()),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock prompt generator failure".to_string(),
            )),
            MockBehavior::Empty => Ok(vec![]),
            MockBehavior::PerSceneErrors => Ok(scenes
                .iter()
                .map(|scene| ScenePrompt {
                    scene_number: scene.scene_number.clone(),
                    heading: scene.heading.clone(),
                    prompt: None,
                    error: Some("mock per-scene prompt failure".to_string()),
                })
                .collect()),
        }
    }
}

/// Mock image generator
#[derive(Debug)]
pub struct MockImageGenerator {
    behavior: MockBehavior,
    request_count: Arc<AtomicUsize>,
}

impl MockImageGenerator {
    /// Create a mock with the given behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns no images
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock whose every entry carries a per-scene error
    pub fn per_scene_errors() -> Self {
        Self::new(MockBehavior::PerSceneErrors)
    }

    /// Number of calls made to this mock
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_images(
        &self,
        prompts: &[ScenePrompt],
    ) -> Result<Vec<SceneImage>, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(prompts
                .iter()
                .map(|entry| SceneImage {
                    scene_number: entry.scene_number.clone(),
                    image_b64: entry
                        .prompt
                        .as_ref()
                        .map(|_| "aGVsbG8gc3Rvcnlib2FyZA==".to_string()),
                    error: entry.error.clone(),
                })
                .collect()),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock image generator failure".to_string(),
            )),
            MockBehavior::Empty => Ok(vec![]),
            MockBehavior::PerSceneErrors => Ok(prompts
                .iter()
                .map(|entry| SceneImage {
                    scene_number: entry.scene_number.clone(),
                    image_b64: None,
                    error: Some("mock per-scene image failure".to_string()),
                })
                .collect()),
        }
    }
}
