//! Chat assistant configuration: model endpoint, credential lookup, and
//! the fixed texts shown in the transcript.

use serde::{Deserialize, Serialize};

/// Remote model and session text settings.
///
/// Text fields left as `None` fall back to the built-in strings compiled
/// into `winter-ai`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Model identifier sent with every request.
    pub model: String,
    /// Name of the environment variable holding the API key.
    /// Read at request time, never stored in the config file.
    pub api_key_env: String,
    /// Base URL of the `models` collection of the Generative Language API.
    pub base_url: String,
    /// Persona preamble prepended to every user turn.
    pub persona: Option<String>,
    /// Seed message shown when a session starts.
    pub greeting: Option<String>,
    /// Message shown in place of a reply when a request fails.
    pub fallback_notice: Option<String>,
    /// Message shown when the model answers with no text.
    pub empty_reply_notice: Option<String>,
    /// Connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            api_key_env: "API_KEY".into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            persona: None,
            greeting: None,
            fallback_notice: None,
            empty_reply_notice: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
