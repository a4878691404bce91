//! Assistant section validation.

use super::helpers::{validate_non_blank, validate_range};
use crate::schema::WinterConfig;

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &WinterConfig) {
    let a = &config.assistant;

    validate_non_blank(errors, "assistant.model", &a.model);
    validate_non_blank(errors, "assistant.api_key_env", &a.api_key_env);
    validate_non_blank(errors, "assistant.base_url", &a.base_url);

    if !a.base_url.trim().is_empty()
        && !(a.base_url.starts_with("http://") || a.base_url.starts_with("https://"))
    {
        errors.push(format!(
            "assistant.base_url = {:?} must start with http:// or https://",
            a.base_url
        ));
    }

    if let Some(ref persona) = a.persona {
        validate_non_blank(errors, "assistant.persona", persona);
    }
    if let Some(ref greeting) = a.greeting {
        validate_non_blank(errors, "assistant.greeting", greeting);
    }
    if let Some(ref notice) = a.fallback_notice {
        validate_non_blank(errors, "assistant.fallback_notice", notice);
    }

    validate_range(
        errors,
        "assistant.connect_timeout_secs",
        a.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "assistant.request_timeout_secs",
        a.request_timeout_secs,
        1,
        600,
    );
}
