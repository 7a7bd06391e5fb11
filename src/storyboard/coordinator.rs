/*!
 * Storyboard generation coordinator.
 *
 * Sequences the pipeline: scene analysis -> prompt generation -> image
 * generation -> formatting -> optional persistence. The three generative
 * collaborators are constructor-supplied trait objects, so there is no
 * process-wide state and tests can substitute mocks freely.
 *
 * Collaborator failures never escape: `generate` always returns a
 * `StoryboardOutcome`, with failures folded into the `Failed` variant.
 */

use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};

use crate::app_config::StorageConfig;
use crate::errors::StoryboardError;
use crate::providers::{ImageGenerator, PromptGenerator, StoryboardFormatter};
use crate::script::ScriptRecord;
use crate::storage;

use super::model::{ShotSettings, Storyboard, StoryboardOutcome, StoryboardScene, TechnicalParams};
use super::shots::ShotAnalyzer;

/// Coordinator for the storyboard pipeline
pub struct StoryboardCoordinator {
    prompt_generator: Arc<dyn PromptGenerator>,
    image_generator: Arc<dyn ImageGenerator>,
    formatter: Arc<dyn StoryboardFormatter>,
    analyzer: ShotAnalyzer,
    /// Where storyboard JSON is persisted; None disables persistence
    output_dir: Option<PathBuf>,
}

impl StoryboardCoordinator {
    /// Create a coordinator with the given collaborators
    pub fn new(
        prompt_generator: Arc<dyn PromptGenerator>,
        image_generator: Arc<dyn ImageGenerator>,
        formatter: Arc<dyn StoryboardFormatter>,
    ) -> Self {
        Self {
            prompt_generator,
            image_generator,
            formatter,
            analyzer: ShotAnalyzer::new(),
            output_dir: None,
        }
    }

    /// Use a custom shot analyzer
    pub fn with_analyzer(mut self, analyzer: ShotAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Persist generated storyboards under the given directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Persist generated storyboards under the configured storyboard
    /// directory
    pub fn with_storage_config(self, config: &StorageConfig) -> Self {
        self.with_output_dir(&config.storyboard_dir)
    }

    /// Run the full pipeline for a script.
    ///
    /// Always returns an outcome; stage failures become
    /// `StoryboardOutcome::Failed`.
    pub async fn generate(
        &self,
        script: &ScriptRecord,
        settings: Option<&ShotSettings>,
    ) -> StoryboardOutcome {
        match self.run(script, settings).await {
            Ok((storyboard, saved_path)) => StoryboardOutcome::Completed {
                storyboard,
                saved_path,
            },
            Err(e) => {
                error!("Storyboard generation failed: {}", e);
                StoryboardOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    async fn run(
        &self,
        script: &ScriptRecord,
        settings: Option<&ShotSettings>,
    ) -> Result<(Storyboard, Option<PathBuf>), StoryboardError> {
        info!("Starting storyboard generation pipeline");

        let scenes = self.analyze_scenes(script, settings);
        if scenes.is_empty() {
            return Err(StoryboardError::NoScenes);
        }
        info!("Found {} scenes for storyboard generation", scenes.len());

        info!("Step 1: Generating image prompts");
        let prompts = self.prompt_generator.generate_prompts(&scenes).await?;
        if prompts.is_empty() {
            return Err(StoryboardError::EmptyStage("prompt generation".to_string()));
        }

        info!("Step 2: Generating storyboard images");
        let images = self.image_generator.generate_images(&prompts).await?;
        if images.is_empty() {
            return Err(StoryboardError::EmptyStage("image generation".to_string()));
        }

        info!("Step 3: Formatting storyboard");
        let storyboard = self
            .formatter
            .format_storyboard(&scenes, &prompts, &images)
            .await?;

        let saved_path = match &self.output_dir {
            Some(dir) => Some(
                storage::write_storyboard(dir, &storyboard)
                    .map_err(|e| StoryboardError::Persist(e.to_string()))?,
            ),
            None => None,
        };

        info!("Storyboard generation pipeline completed");
        Ok((storyboard, saved_path))
    }

    /// Analyze scenes and apply shot settings.
    ///
    /// Scenes come out in ascending scene_number order with shot type and
    /// mood filled in; scene-specific overrides win over global ones.
    pub fn analyze_scenes(
        &self,
        script: &ScriptRecord,
        settings: Option<&ShotSettings>,
    ) -> Vec<StoryboardScene> {
        script
            .scenes_sorted()
            .into_iter()
            .map(|scene| {
                let mut params = TechnicalParams {
                    shot_type: self.analyzer.determine_shot_type(&scene.description),
                    mood: self.analyzer.analyze_mood(&scene.description),
                    ..Default::default()
                };

                if let Some(settings) = settings {
                    if let Some(shot_type) = &settings.default_shot_type {
                        params.shot_type = shot_type.clone();
                    }
                    if let Some(style) = &settings.style {
                        params.style = style.clone();
                    }
                    if let Some(mood) = &settings.mood {
                        params.mood = mood.clone();
                    }
                    if let Some(overrides) = settings.scene_settings.get(&scene.scene_number) {
                        if let Some(shot_type) = &overrides.shot_type {
                            params.shot_type = shot_type.clone();
                        }
                        if let Some(style) = &overrides.style {
                            params.style = style.clone();
                        }
                        if let Some(mood) = &overrides.mood {
                            params.mood = mood.clone();
                        }
                    }
                }

                StoryboardScene {
                    scene_number: scene.scene_number.clone(),
                    heading: scene_heading(scene),
                    description: scene.description.clone(),
                    technical_params: params,
                }
            })
            .collect()
    }
}

/// Slug-line style heading for a scene, e.g. "INT. WAREHOUSE - NIGHT"
fn scene_heading(scene: &crate::script::Scene) -> String {
    let mut heading = String::new();
    if !scene.location.location_type.is_empty() {
        heading.push_str(&scene.location.location_type);
        heading.push_str(". ");
    }
    if !scene.location.place.is_empty() {
        heading.push_str(&scene.location.place);
    }
    if !scene.time.is_empty() {
        if !heading.is_empty() {
            heading.push_str(" - ");
        }
        heading.push_str(&scene.time);
    }
    if heading.is_empty() {
        heading = format!("Scene {}", scene.scene_number);
    }
    heading
}
