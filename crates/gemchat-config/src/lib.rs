//! gemchat configuration system.
//!
//! Provides TOML-based configuration with validation and credential
//! resolution. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gemchat_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use credentials::resolve_api_key;
pub use schema::GemchatConfig;

use std::path::Path;

use gemchat_common::ConfigError;

const REDACTED: &str = "[REDACTED]";

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<GemchatConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
///
/// A missing file is an error here; the default template is only written
/// to the platform path.
pub fn load_config_from(path: &Path) -> Result<GemchatConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
///
/// An inline API key is replaced with `[REDACTED]`.
pub fn config_to_json(config: &GemchatConfig) -> String {
    let mut shown = config.clone();
    if shown.api.api_key.is_some() {
        shown.api.api_key = Some(REDACTED.to_string());
    }
    serde_json::to_string_pretty(&shown)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
