use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::validation::ValidationConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Validation rule configuration
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Generative provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Artifact storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Default level
    #[default]
    Info,
    /// Verbose output
    Debug,
    /// Everything
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Generative provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Chat model used for prompt generation
    #[serde(default = "default_model")]
    pub model: String,

    /// Image model used for storyboard panels
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// API key
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service URL, empty for the public API
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Image dimensions
    #[serde(default = "default_image_size")]
    pub image_size: String,

    /// Image quality (standard or hd)
    #[serde(default = "default_image_quality")]
    pub image_quality: String,

    /// Image style (natural or vivid)
    #[serde(default = "default_image_style")]
    pub image_style: String,
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_image_size() -> String {
    "1024x1024".to_string()
}

fn default_image_quality() -> String {
    "standard".to_string()
}

fn default_image_style() -> String {
    "natural".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            image_model: default_image_model(),
            api_key: String::new(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
            image_size: default_image_size(),
            image_quality: default_image_quality(),
            image_style: default_image_style(),
        }
    }
}

/// Artifact storage configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory for generated storyboard JSON
    #[serde(default = "default_storyboard_dir")]
    pub storyboard_dir: String,

    /// Directory for validation result JSON
    #[serde(default = "default_validation_dir")]
    pub validation_dir: String,
}

fn default_storyboard_dir() -> String {
    "data/storyboards".to_string()
}

fn default_validation_dir() -> String {
    "data/validation".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storyboard_dir: default_storyboard_dir(),
            validation_dir: default_validation_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Check that the configuration values are coherent
    pub fn validate(&self) -> Result<()> {
        if self.validation.epsilon_minutes < 0.0 {
            return Err(anyhow!("epsilon_minutes must be non-negative"));
        }
        if self.validation.fast_max_minutes > self.validation.slow_min_minutes {
            return Err(anyhow!(
                "fast_max_minutes ({}) must not exceed slow_min_minutes ({})",
                self.validation.fast_max_minutes,
                self.validation.slow_min_minutes
            ));
        }
        if !(0.0..=1.0).contains(&self.validation.fast_pacing_ratio) {
            return Err(anyhow!("fast_pacing_ratio must be within 0..=1"));
        }
        if self.provider.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be positive"));
        }
        Ok(())
    }
}
