//! Validation for the api and ui sections.

use crate::schema::GemchatConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &GemchatConfig) {
    validate_non_empty(errors, "api.base_url", &config.api.base_url);
    validate_range(
        errors,
        "api.connect_timeout_secs",
        config.api.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "api.request_timeout_secs",
        config.api.request_timeout_secs,
        0,
        3600,
    );
}

pub(crate) fn validate_ui(errors: &mut Vec<String>, config: &GemchatConfig) {
    validate_range(errors, "ui.scroll_step", config.ui.scroll_step, 1, 50);
    validate_non_empty(errors, "ui.timestamp_format", &config.ui.timestamp_format);
}
