//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Winter Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[assistant]
# model = "gemini-2.5-flash"
# api_key_env = "API_KEY"        # environment variable read at request time
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# connect_timeout_secs = 10      # 1-60
# request_timeout_secs = 120     # 1-600
# persona = """
# You are the assistant for a student portfolio...
# """
# greeting = "Initialize Protocol: 2026. Waiting for input..."
# fallback_notice = "Connection severed. Check API uplinks."
# empty_reply_notice = "Data stream empty."

[logging]
# level = "INFO"                 # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
