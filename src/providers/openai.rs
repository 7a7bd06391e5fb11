/*!
 * OpenAI client and the prompt/image generation agents built on it.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app_config::ProviderConfig;
use crate::errors::ProviderError;
use crate::storyboard::model::{SceneImage, ScenePrompt, StoryboardScene};

use super::{ImageGenerator, PromptGenerator};

const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// OpenAI client for chat completions and image generation
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
}

/// Chat completion request
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<ChatMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Chat message format
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// Completion choices
    pub choices: Vec<ChatChoice>,
}

/// One completion choice
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatMessage,
}

/// Image generation request
#[derive(Debug, Serialize)]
pub struct ImageRequest {
    /// The model to use, e.g. "dall-e-3"
    model: String,

    /// The image prompt
    prompt: String,

    /// Number of images to generate
    n: u32,

    /// Image dimensions, e.g. "1024x1024"
    size: String,

    /// Image quality (standard or hd)
    quality: String,

    /// Image style (natural or vivid)
    style: String,

    /// Payload format; we always request base64
    response_format: String,
}

/// Image generation response
#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    /// Generated images
    pub data: Vec<ImageData>,
}

/// One generated image payload
#[derive(Debug, Deserialize)]
pub struct ImageData {
    /// Base64-encoded image bytes
    pub b64_json: Option<String>,
}

impl ChatRequest {
    /// Create a new chat request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: Some(0.7),
            max_tokens: None,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

impl OpenAiClient {
    /// Create a new OpenAI client with the default request timeout
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::with_timeout(api_key, endpoint, Duration::from_secs(120))
    }

    /// Create a new OpenAI client with a custom request timeout
    pub fn with_timeout(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client from the provider configuration section
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::with_timeout(
            config.api_key.clone(),
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}{}", base, path)
    }

    /// Complete a chat request
    pub async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let response = self
            .client
            .post(self.url("/v1/chat/completions"))
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    /// Generate a single image
    pub async fn generate_image(
        &self,
        request: ImageRequest,
    ) -> Result<ImageResponse, ProviderError> {
        let response = self
            .client
            .post(self.url("/v1/images/generations"))
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenAI image API error ({}): {}", status, error_text);
            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimitExceeded(error_text));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<ImageResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    /// Test the connection to the API
    pub async fn test_connection(&self, model: &str) -> Result<(), ProviderError> {
        let request = ChatRequest::new(model)
            .max_tokens(10)
            .add_message("user", "Hello");
        self.complete(request).await?;
        Ok(())
    }

    /// Extract text from a chat response
    pub fn extract_text(response: &ChatResponse) -> String {
        response
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .unwrap_or_default()
    }
}

/// Prompt generation agent backed by a chat model
#[derive(Debug)]
pub struct OpenAiPromptGenerator {
    client: OpenAiClient,
    model: String,
}

impl OpenAiPromptGenerator {
    /// Create a new prompt generator
    pub fn new(client: OpenAiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Create a prompt generator from the provider configuration section
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(OpenAiClient::from_config(config), config.model.clone())
    }

    fn build_instruction(scene: &StoryboardScene) -> String {
        format!(
            "Write a single-paragraph visual prompt for an AI image generator, \
             based on this scene from a screenplay. Cover setting, characters \
             and action, specify a {} framing, and describe lighting and a {} \
             mood. Use concrete visual language, skip dialogue, stay under 200 \
             words, and output only the prompt.\n\nSCENE: {}",
            scene.technical_params.shot_type, scene.technical_params.mood, scene.description
        )
    }
}

#[async_trait]
impl PromptGenerator for OpenAiPromptGenerator {
    async fn generate_prompts(
        &self,
        scenes: &[StoryboardScene],
    ) -> Result<Vec<ScenePrompt>, ProviderError> {
        info!("Generating prompts for {} scenes", scenes.len());
        let mut results = Vec::with_capacity(scenes.len());

        for scene in scenes {
            if scene.description.trim().is_empty() {
                warn!("Scene {} has no description, skipping", scene.scene_number);
                results.push(ScenePrompt {
                    scene_number: scene.scene_number.clone(),
                    heading: scene.heading.clone(),
                    prompt: None,
                    error: Some("Scene has no description".to_string()),
                });
                continue;
            }

            let request = ChatRequest::new(&self.model)
                .add_message("user", Self::build_instruction(scene));

            match self.client.complete(request).await {
                Ok(response) => {
                    results.push(ScenePrompt {
                        scene_number: scene.scene_number.clone(),
                        heading: scene.heading.clone(),
                        prompt: Some(OpenAiClient::extract_text(&response)),
                        error: None,
                    });
                }
                Err(e) => {
                    error!(
                        "Prompt generation failed for scene {}: {}",
                        scene.scene_number, e
                    );
                    results.push(ScenePrompt {
                        scene_number: scene.scene_number.clone(),
                        heading: scene.heading.clone(),
                        prompt: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        Ok(results)
    }
}

/// Image generation agent configuration
#[derive(Debug, Clone)]
pub struct ImageGeneratorConfig {
    /// Image model name
    pub model: String,
    /// Image dimensions
    pub size: String,
    /// Image quality (standard or hd)
    pub quality: String,
    /// Image style (natural or vivid)
    pub style: String,
}

impl Default for ImageGeneratorConfig {
    fn default() -> Self {
        Self {
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            style: "natural".to_string(),
        }
    }
}

impl From<&ProviderConfig> for ImageGeneratorConfig {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            model: config.image_model.clone(),
            size: config.image_size.clone(),
            quality: config.image_quality.clone(),
            style: config.image_style.clone(),
        }
    }
}

/// Image generation agent backed by the images endpoint
#[derive(Debug)]
pub struct OpenAiImageGenerator {
    client: OpenAiClient,
    config: ImageGeneratorConfig,
}

impl OpenAiImageGenerator {
    /// Create a new image generator with default parameters
    pub fn new(client: OpenAiClient) -> Self {
        Self::with_config(client, ImageGeneratorConfig::default())
    }

    /// Create a new image generator with custom parameters
    pub fn with_config(client: OpenAiClient, config: ImageGeneratorConfig) -> Self {
        Self { client, config }
    }

    /// Create an image generator from the provider configuration section
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::with_config(OpenAiClient::from_config(config), config.into())
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageGenerator {
    async fn generate_images(
        &self,
        prompts: &[ScenePrompt],
    ) -> Result<Vec<SceneImage>, ProviderError> {
        info!("Generating images for {} prompts", prompts.len());
        let mut results = Vec::with_capacity(prompts.len());

        for entry in prompts {
            let Some(prompt) = &entry.prompt else {
                results.push(SceneImage {
                    scene_number: entry.scene_number.clone(),
                    image_b64: None,
                    error: entry
                        .error
                        .clone()
                        .or_else(|| Some("Missing prompt".to_string())),
                });
                continue;
            };

            let request = ImageRequest {
                model: self.config.model.clone(),
                prompt: prompt.clone(),
                n: 1,
                size: self.config.size.clone(),
                quality: self.config.quality.clone(),
                style: self.config.style.clone(),
                response_format: "b64_json".to_string(),
            };

            match self.client.generate_image(request).await {
                Ok(response) => {
                    let image_b64 = response.data.into_iter().find_map(|d| d.b64_json);
                    results.push(SceneImage {
                        scene_number: entry.scene_number.clone(),
                        error: if image_b64.is_some() {
                            None
                        } else {
                            Some("Empty image payload in response".to_string())
                        },
                        image_b64,
                    });
                }
                Err(e) => {
                    error!(
                        "Image generation failed for scene {}: {}",
                        entry.scene_number, e
                    );
                    results.push(SceneImage {
                        scene_number: entry.scene_number.clone(),
                        image_b64: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        Ok(results)
    }
}
