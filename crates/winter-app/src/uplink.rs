//! Builds the completion client and session settings from config.

use std::time::Duration;

use winter_ai::{GeminiConfig, SessionSettings};
use winter_config::AssistantConfig;

/// Gemini client settings, with an optional `--model` override applied.
pub fn gemini_config(assistant: &AssistantConfig, model_override: Option<&str>) -> GeminiConfig {
    let model = model_override.unwrap_or(assistant.model.as_str());
    GeminiConfig::new()
        .with_model(model)
        .with_api_key_env(assistant.api_key_env.clone())
        .with_base_url(assistant.base_url.clone())
        .with_timeouts(
            Duration::from_secs(u64::from(assistant.connect_timeout_secs)),
            Duration::from_secs(u64::from(assistant.request_timeout_secs)),
        )
}

/// Session texts; unset overrides keep the built-in strings.
pub fn session_settings(assistant: &AssistantConfig) -> SessionSettings {
    let defaults = SessionSettings::default();
    SessionSettings {
        persona: assistant.persona.clone().or(defaults.persona),
        greeting: assistant.greeting.clone().unwrap_or(defaults.greeting),
        fallback_notice: assistant
            .fallback_notice
            .clone()
            .unwrap_or(defaults.fallback_notice),
        empty_reply_notice: assistant
            .empty_reply_notice
            .clone()
            .unwrap_or(defaults.empty_reply_notice),
    }
}
