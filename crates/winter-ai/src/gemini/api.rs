//! CompletionClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{CompletionClient, CompletionError, Prompt};

use super::client::GeminiClient;

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        // Resolved per call so a key exported after startup is picked up.
        let api_key = self.config.resolve_api_key()?;

        let body = self.build_request_body(prompt);
        let url = self.api_url();

        debug!(model = %self.config.model, prompt_chars = prompt.text().len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(CompletionError::Remote(format!("HTTP {status}: {text}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let json: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| CompletionError::Remote(format!("malformed response body: {e}")))?;

        let text = self.parse_response(&json);
        debug!(reply_chars = text.len(), "Gemini API response");
        Ok(text)
    }
}
