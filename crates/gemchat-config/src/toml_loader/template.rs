//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# gemchat configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# api_key = "..."                 # inline key; prefer the env var below
# api_key_env = "GEMINI_API_KEY"
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# connect_timeout_secs = 10       # 1-120
# request_timeout_secs = 0        # 0-3600, 0 = no timeout

[model]
name = "gemini-1.5-pro"
# system_instruction = "You are a helpful assistant."

[generation]
# temperature = 0.9               # 0.0-2.0
# top_p = 1.0                     # 0.0-1.0
# top_k = 1                       # 1-1000
# max_output_tokens = 2048        # 1-65536
# response_mime_type = "text/plain"   # or "application/json"

[safety]
# block_low_and_above | block_medium_and_above | block_only_high | block_none
# harassment = "block_medium_and_above"
# hate_speech = "block_medium_and_above"
# sexually_explicit = "block_medium_and_above"
# dangerous_content = "block_medium_and_above"

[ui]
# title = "Gemini Chat"
# placeholder = "Type your message..."
# timestamp_format = "%m/%d/%Y, %I:%M:%S %p"
# scroll_step = 3                 # 1-50

[logging]
# level = "INFO"                  # TRACE, DEBUG, INFO, WARNING, ERROR
# file_logging = true
# file = "/tmp/gemchat.log"
"##
    .to_string()
}
