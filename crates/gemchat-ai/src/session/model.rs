//! Generative model handle and chat start-up.

use std::sync::Arc;

use tracing::debug;

use crate::types::{Content, GenerationConfig, Role, SafetySetting};
use crate::{AiClient, AiError};

use super::chat::ChatSession;

/// Everything fixed at session creation.
#[derive(Debug, Clone, Default)]
pub struct StartChatParams {
    pub generation_config: Option<GenerationConfig>,
    pub safety_settings: Vec<SafetySetting>,
    pub system_instruction: Option<String>,
    /// Turns the remote model should treat as already exchanged.
    pub history: Vec<Content>,
}

/// A model bound to a client, able to open chat sessions.
pub struct GenerativeModel {
    client: Arc<dyn AiClient>,
}

impl GenerativeModel {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self { client }
    }

    pub fn model_name(&self) -> &str {
        self.client.model()
    }

    /// Open a chat seeded with `params.history`.
    ///
    /// No request is made; this only checks that the history is something
    /// the API will accept.
    pub fn start_chat(&self, params: StartChatParams) -> Result<ChatSession, AiError> {
        validate_history(&params.history)?;
        debug!(
            model = %self.client.model(),
            history = params.history.len(),
            "starting chat session"
        );
        Ok(ChatSession::new(Arc::clone(&self.client), params))
    }
}

/// Check that a history starts with a user turn, alternates user/model,
/// and has no turn without parts.
pub fn validate_history(history: &[Content]) -> Result<(), AiError> {
    let mut previous: Option<Role> = None;

    for (index, content) in history.iter().enumerate() {
        if content.parts.is_empty() {
            return Err(AiError::InvalidHistory(format!(
                "turn {index} ({}) has no parts",
                content.role.as_str()
            )));
        }

        let expected = match previous {
            None | Some(Role::Model) => Role::User,
            Some(Role::User) => Role::Model,
        };
        if content.role != expected {
            return Err(AiError::InvalidHistory(format!(
                "turn {index} is {} but {} was expected",
                content.role.as_str(),
                expected.as_str()
            )));
        }

        previous = Some(content.role);
    }

    Ok(())
}
