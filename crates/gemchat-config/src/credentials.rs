//! API key resolution.
//!
//! The key is a static credential: read once at startup, held in memory
//! for the life of the process, never rotated.

use crate::schema::ApiConfig;

/// Resolve the API key from the inline config value or the configured
/// environment variable, in that order. Blank values count as absent.
pub fn resolve_api_key(api: &ApiConfig) -> Option<String> {
    resolve_with(api, |name| std::env::var(name).ok())
}

fn resolve_with(api: &ApiConfig, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    if let Some(key) = api.api_key.as_deref().map(str::trim) {
        if !key.is_empty() {
            return Some(key.to_string());
        }
    }

    if api.api_key_env.trim().is_empty() {
        return None;
    }

    lookup(&api.api_key_env)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
