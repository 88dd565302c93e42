//! Events and user-facing error strings.

use gemchat_ai::ChatReply;

/// Shown when the remote session could not be created.
pub const INIT_FAILED_MESSAGE: &str = "Failed to initialize chat. Please try again.";

/// Shown when a single message could not be answered.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Outcome of one in-flight request, delivered to the UI thread.
#[derive(Debug)]
pub enum ChatEvent {
    Reply(ChatReply),
    /// Carries the cause for logging only; the UI shows a fixed message.
    SendFailed(String),
}
