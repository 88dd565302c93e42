//! Terminal UI presentation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub placeholder: String,
    /// chrono `strftime` format used under each message.
    pub timestamp_format: String,
    /// Lines scrolled per Up/Down key press (valid range: 1-50).
    pub scroll_step: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Gemini Chat".into(),
            placeholder: "Type your message...".into(),
            timestamp_format: "%m/%d/%Y, %I:%M:%S %p".into(),
            scroll_step: 3,
        }
    }
}
