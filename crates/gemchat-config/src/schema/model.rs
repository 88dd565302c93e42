//! Model selection and generation parameters.

use serde::{Deserialize, Serialize};

/// Which model to talk to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    /// Optional system instruction sent with every request.
    pub system_instruction: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-1.5-pro".into(),
            system_instruction: None,
        }
    }
}

/// Sampling and output parameters passed as `generationConfig`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSchemaConfig {
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Nucleus sampling cutoff (valid range: 0.0-1.0).
    pub top_p: f64,
    /// Top-k sampling (valid range: 1-1000).
    pub top_k: u32,
    /// Output cap (valid range: 1-65536).
    pub max_output_tokens: u32,
    /// `text/plain` or `application/json`.
    pub response_mime_type: String,
}

impl Default for GenerationSchemaConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_p: 1.0,
            top_k: 1,
            max_output_tokens: 2048,
            response_mime_type: "text/plain".into(),
        }
    }
}
