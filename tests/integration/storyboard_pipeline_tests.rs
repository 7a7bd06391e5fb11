/*!
 * End-to-end storyboard pipeline tests with mock collaborators
 */

use std::sync::Arc;

use scriptboard::providers::mock::{MockImageGenerator, MockPromptGenerator};
use scriptboard::storyboard::model::SceneShotOverride;
use scriptboard::storyboard::{LayoutFormatter, ShotSettings, StoryboardCoordinator, StoryboardOutcome};

use crate::common::{consistent_script, create_temp_dir, init_logging};

#[tokio::test]
async fn test_pipeline_withWorkingCollaborators_shouldProduceOnePanelPerScene() {
    init_logging();
    let prompts = Arc::new(MockPromptGenerator::working());
    let images = Arc::new(MockImageGenerator::working());
    let coordinator = StoryboardCoordinator::new(
        Arc::clone(&prompts) as Arc<dyn scriptboard::providers::PromptGenerator>,
        Arc::clone(&images) as Arc<dyn scriptboard::providers::ImageGenerator>,
        Arc::new(LayoutFormatter::new()),
    );
    let script = consistent_script();

    let outcome = coordinator.generate(&script, None).await;

    match outcome {
        StoryboardOutcome::Completed {
            storyboard,
            saved_path,
        } => {
            assert_eq!(storyboard.scenes.len(), script.scenes.len());
            assert!(storyboard.scenes.iter().all(|s| s.image_b64.is_some()));
            assert!(storyboard.scenes.iter().all(|s| s.error.is_none()));
            assert!(saved_path.is_none());
        }
        StoryboardOutcome::Failed { error } => panic!("unexpected failure: {}", error),
    }
    // Each collaborator is called once per run, not per scene
    assert_eq!(prompts.request_count(), 1);
    assert_eq!(images.request_count(), 1);
}

#[tokio::test]
async fn test_pipeline_withOutputDir_shouldPersistStoryboardJson() {
    init_logging();
    let dir = create_temp_dir().unwrap();
    let coordinator = StoryboardCoordinator::new(
        Arc::new(MockPromptGenerator::working()),
        Arc::new(MockImageGenerator::working()),
        Arc::new(LayoutFormatter::new()),
    )
    .with_output_dir(dir.path());

    let outcome = coordinator.generate(&consistent_script(), None).await;

    let StoryboardOutcome::Completed { saved_path, .. } = outcome else {
        panic!("expected a completed outcome");
    };
    let saved_path = saved_path.expect("persistence was configured");
    assert!(saved_path.exists());

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&saved_path).unwrap()).unwrap();
    assert_eq!(written["scenes"].as_array().unwrap().len(), 6);
    assert!(written["generated_at"].is_string());
}

#[tokio::test]
async fn test_pipeline_withStorageConfig_shouldPersistUnderConfiguredDir() {
    init_logging();
    let dir = create_temp_dir().unwrap();
    let storage = scriptboard::app_config::StorageConfig {
        storyboard_dir: dir.path().join("boards").to_string_lossy().to_string(),
        validation_dir: "unused".to_string(),
    };
    let coordinator = StoryboardCoordinator::new(
        Arc::new(MockPromptGenerator::working()),
        Arc::new(MockImageGenerator::working()),
        Arc::new(LayoutFormatter::new()),
    )
    .with_storage_config(&storage);

    let outcome = coordinator.generate(&consistent_script(), None).await;

    let StoryboardOutcome::Completed { saved_path, .. } = outcome else {
        panic!("expected a completed outcome");
    };
    let saved_path = saved_path.expect("persistence was configured");
    assert!(saved_path.starts_with(dir.path().join("boards")));
    assert!(saved_path.exists());
}

#[tokio::test]
async fn test_pipeline_withPerSceneErrors_shouldCompleteWithErrorPanels() {
    init_logging();
    let coordinator = StoryboardCoordinator::new(
        Arc::new(MockPromptGenerator::per_scene_errors()),
        Arc::new(MockImageGenerator::working()),
        Arc::new(LayoutFormatter::new()),
    );

    let outcome = coordinator.generate(&consistent_script(), None).await;

    let StoryboardOutcome::Completed { storyboard, .. } = outcome else {
        panic!("per-scene failures must not fail the whole run");
    };
    assert!(storyboard.scenes.iter().all(|s| s.error.is_some()));
    assert!(storyboard.scenes.iter().all(|s| s.image_b64.is_none()));
}

#[tokio::test]
async fn test_pipeline_withFailingImageStage_shouldReturnStructuredFailure() {
    init_logging();
    let coordinator = StoryboardCoordinator::new(
        Arc::new(MockPromptGenerator::working()),
        Arc::new(MockImageGenerator::failing()),
        Arc::new(LayoutFormatter::new()),
    );

    let outcome = coordinator.generate(&consistent_script(), None).await;

    match &outcome {
        StoryboardOutcome::Failed { error } => {
            assert!(error.contains("mock image generator failure"));
        }
        StoryboardOutcome::Completed { .. } => panic!("expected failure"),
    }

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "failed");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_pipeline_withShotSettings_shouldFlowIntoPrompts() {
    init_logging();
    let coordinator = StoryboardCoordinator::new(
        Arc::new(MockPromptGenerator::working()),
        Arc::new(MockImageGenerator::working()),
        Arc::new(LayoutFormatter::new()),
    );
    let mut settings = ShotSettings {
        default_shot_type: Some("WS".to_string()),
        ..Default::default()
    };
    settings.scene_settings.insert(
        "2".to_string(),
        SceneShotOverride {
            shot_type: Some("ECU".to_string()),
            ..Default::default()
        },
    );

    let outcome = coordinator.generate(&consistent_script(), Some(&settings)).await;

    let StoryboardOutcome::Completed { storyboard, .. } = outcome else {
        panic!("expected a completed outcome");
    };
    assert_eq!(storyboard.scenes[0].shot_type, "WS");
    assert_eq!(storyboard.scenes[1].shot_type, "ECU");
    assert!(
        storyboard.scenes[1]
            .prompt
            .as_ref()
            .unwrap()
            .contains("ECU shot of:")
    );
}
