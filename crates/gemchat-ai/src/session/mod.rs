//! Chat sessions on top of a generative model.
//!
//! A `ChatSession` holds the conversation history the remote model sees
//! and appends each completed turn to it, so callers only send the new
//! user text.

mod chat;
mod model;

#[cfg(test)]
mod tests;

pub use chat::{ChatReply, ChatSession};
pub use model::{validate_history, GenerativeModel, StartChatParams};
