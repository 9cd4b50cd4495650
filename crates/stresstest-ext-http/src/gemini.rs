//! Gemini `generateContent` text generator.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use stresstest_traits::{TextGenerator, TraitError};
use tracing::debug;

use crate::transport_error;

/// Default API root.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Gemini generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key. Without one the generator is not constructed.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// API root; `/models/{model}:generateContent` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Extracts the first candidate's text from a `generateContent` response.
///
/// Text parts are concatenated in order.
pub fn extract_text(body: &str) -> Result<String, TraitError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| TraitError::ParseError(format!("gemini: {e}")))?;

    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| TraitError::ParseError("gemini: no candidates in response".into()))?;

    Ok(content.parts.into_iter().filter_map(|p| p.text).collect())
}

/// Text generator backed by the Gemini API.
pub struct GeminiTextGenerator {
    client: Client,
    api_key: String,
    config: GeminiConfig,
}

impl GeminiTextGenerator {
    /// Create a generator, or `None` when no API key is configured.
    pub fn from_config(config: GeminiConfig) -> Option<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())?;
        Some(Self {
            client: Client::new(),
            api_key,
            config,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, TraitError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": self.config.temperature },
        });

        debug!("Requesting generation from {}", self.config.model);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("gemini", e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error("gemini", e))?;

        if !status.is_success() {
            return Err(TraitError::from_status(status.as_u16(), text));
        }

        extract_text(&text)
    }
}
