//! Gemini client struct, request building, and response parsing.

use crate::{CompletionError, Prompt};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                CompletionError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body: one user content block, no history.
    pub(crate) fn build_request_body(&self, prompt: &Prompt) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt.text() }]
            }]
        })
    }

    /// Extract the reply text from a `generateContent` response.
    ///
    /// Text parts of the first candidate are concatenated. A response with
    /// no candidate or no text parts yields an empty string.
    pub(crate) fn parse_response(&self, json: &serde_json::Value) -> String {
        let Some(parts) = json["candidates"][0]["content"]["parts"].as_array() else {
            return String::new();
        };

        parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect()
    }
}
