//! Displayed chat messages.

use chrono::{DateTime, Local};
use gemchat_ai::{Content, Role};

/// Who wrote a message in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    /// Label printed under each message.
    pub fn label(self) -> &'static str {
        match self {
            ChatRole::User => "YOU",
            ChatRole::Bot => "BOT",
        }
    }
}

/// One transcript entry. Immutable once created.
#[derive(Debug, Clone)]
pub struct Message {
    text: String,
    role: ChatRole,
    timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(text: impl Into<String>, role: ChatRole) -> Self {
        Self {
            text: text.into(),
            role,
            timestamp: Local::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// The turn as the remote model sees it.
    pub fn to_content(&self) -> Content {
        let role = match self.role {
            ChatRole::User => Role::User,
            ChatRole::Bot => Role::Model,
        };
        Content::text(role, self.text.clone())
    }
}
