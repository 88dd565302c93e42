//! Configuration schema types for gemchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod model;
mod safety;
mod system;
mod ui;

pub use api::*;
pub use model::*;
pub use safety::*;
pub use system::*;
pub use ui::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Built once at startup and passed by reference; nothing reads ambient
/// global state after that.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GemchatConfig {
    pub api: ApiConfig,
    pub model: ModelConfig,
    pub generation: GenerationSchemaConfig,
    pub safety: SafetyConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}
