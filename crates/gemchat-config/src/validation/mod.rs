//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod generation;
mod helpers;
mod misc;


use crate::schema::GemchatConfig;
use gemchat_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GemchatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    generation::validate_model(&mut errors, config);
    generation::validate_generation(&mut errors, config);
    misc::validate_api(&mut errors, config);
    misc::validate_ui(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
