//! Validation for the model and generation sections.

use crate::schema::GemchatConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Response MIME types the API accepts for chat output.
const RESPONSE_MIME_TYPES: &[&str] = &["text/plain", "application/json"];

pub(crate) fn validate_model(errors: &mut Vec<String>, config: &GemchatConfig) {
    validate_non_empty(errors, "model.name", &config.model.name);
    if config.model.name.contains('/') || config.model.name.contains(char::is_whitespace) {
        errors.push(format!(
            "model.name = {:?} must be a bare model id",
            config.model.name
        ));
    }
}

pub(crate) fn validate_generation(errors: &mut Vec<String>, config: &GemchatConfig) {
    let generation = &config.generation;
    validate_range_f64(
        errors,
        "generation.temperature",
        generation.temperature,
        0.0,
        2.0,
    );
    validate_range_f64(errors, "generation.top_p", generation.top_p, 0.0, 1.0);
    validate_range(errors, "generation.top_k", generation.top_k, 1, 1000);
    validate_range(
        errors,
        "generation.max_output_tokens",
        generation.max_output_tokens,
        1,
        65536,
    );
    if !RESPONSE_MIME_TYPES.contains(&generation.response_mime_type.as_str()) {
        errors.push(format!(
            "generation.response_mime_type = {:?} must be one of {}",
            generation.response_mime_type,
            RESPONSE_MIME_TYPES.join(", ")
        ));
    }
}
