/*!
 * Keyword-driven shot type and mood analysis.
 *
 * Scene descriptions are matched against configurable keyword tables to
 * pick a shot type and mood before prompt generation. Matching is
 * case-insensitive substring search, first matching table entry wins.
 */

use serde::{Deserialize, Serialize};

/// One shot type with its trigger keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotMapping {
    /// Shot type emitted on a match, e.g. "ESTABLISHING"
    pub shot_type: String,
    /// Keywords that select this shot type
    pub keywords: Vec<String>,
}

/// One mood with its trigger keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodMapping {
    /// Mood emitted on a match, e.g. "tense"
    pub mood: String,
    /// Keywords that select this mood
    pub keywords: Vec<String>,
}

fn mapping(shot_type: &str, keywords: &[&str]) -> ShotMapping {
    ShotMapping {
        shot_type: shot_type.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn mood(name: &str, keywords: &[&str]) -> MoodMapping {
    MoodMapping {
        mood: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Configuration for the shot analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotAnalyzerConfig {
    /// Shot type keyword table, checked in order
    pub shot_mappings: Vec<ShotMapping>,
    /// Mood keyword table, checked in order
    pub mood_mappings: Vec<MoodMapping>,
    /// Shot type when nothing matches
    pub default_shot_type: String,
    /// Mood when nothing matches
    pub default_mood: String,
}

impl Default for ShotAnalyzerConfig {
    fn default() -> Self {
        Self {
            shot_mappings: vec![
                mapping("ESTABLISHING", &["begin", "exterior", "wide", "establishing"]),
                mapping("ACTION", &["fight", "chase", "run", "jump", "battle"]),
                mapping("EMOTION", &["close", "face", "cry", "smile", "emotional"]),
                mapping("DETAIL", &["detail", "object", "specific", "focus"]),
                mapping("TRANSITION", &["fade", "dissolve", "montage"]),
            ],
            mood_mappings: vec![
                mood("tense", &["fight", "danger", "fear", "dark", "threat"]),
                mood("joyful", &["happy", "laugh", "smile", "celebration"]),
                mood("mysterious", &["mystery", "shadow", "secret", "unknown"]),
                mood("melancholic", &["sad", "lonely", "grief", "sorrow"]),
            ],
            default_shot_type: "MS".to_string(),
            default_mood: "neutral".to_string(),
        }
    }
}

/// Analyzer for shot types and moods
#[derive(Debug, Default)]
pub struct ShotAnalyzer {
    config: ShotAnalyzerConfig,
}

impl ShotAnalyzer {
    /// Create a new analyzer with default keyword tables
    pub fn new() -> Self {
        Self {
            config: ShotAnalyzerConfig::default(),
        }
    }

    /// Create a new analyzer with custom keyword tables
    pub fn with_config(config: ShotAnalyzerConfig) -> Self {
        Self { config }
    }

    /// Pick a shot type for a scene description
    pub fn determine_shot_type(&self, description: &str) -> String {
        let description = description.to_lowercase();
        self.config
            .shot_mappings
            .iter()
            .find(|mapping| {
                mapping
                    .keywords
                    .iter()
                    .any(|keyword| description.contains(keyword.as_str()))
            })
            .map(|mapping| mapping.shot_type.clone())
            .unwrap_or_else(|| self.config.default_shot_type.clone())
    }

    /// Pick a mood for a scene description
    pub fn analyze_mood(&self, description: &str) -> String {
        let description = description.to_lowercase();
        self.config
            .mood_mappings
            .iter()
            .find(|mapping| {
                mapping
                    .keywords
                    .iter()
                    .any(|keyword| description.contains(keyword.as_str()))
            })
            .map(|mapping| mapping.mood.clone())
            .unwrap_or_else(|| self.config.default_mood.clone())
    }
}
