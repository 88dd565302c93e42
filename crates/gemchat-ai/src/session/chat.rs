//! ChatSession and the per-message request cycle.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::types::{Content, GenerateContentRequest, Part, SystemInstruction, TokenUsage};
use crate::{AiClient, AiError};

use super::model::StartChatParams;

/// Result of one successful `send_message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub usage: TokenUsage,
}

/// A conversation with the remote model.
///
/// Created once by `GenerativeModel::start_chat`. Requests on the same
/// session are issued one at a time; each sees the turns committed by
/// the previous successful one.
pub struct ChatSession {
    client: Arc<dyn AiClient>,
    params: StartChatParams,
    history: Mutex<Vec<Content>>,
}

impl ChatSession {
    pub(super) fn new(client: Arc<dyn AiClient>, mut params: StartChatParams) -> Self {
        let history = std::mem::take(&mut params.history);
        Self {
            client,
            params,
            history: Mutex::new(history),
        }
    }

    pub fn model_name(&self) -> &str {
        self.client.model()
    }

    /// Send one user message and return the model's plain-text reply.
    ///
    /// On success the user turn and the reply are appended to the history.
    /// On failure the history is left as it was.
    pub async fn send_message(&self, text: impl Into<String>) -> Result<ChatReply, AiError> {
        let user_turn = Content::user(text);

        let mut history = self.history.lock().await;
        let request = self.build_request(&history, &user_turn);

        let response = self.client.generate_content(&request).await?;
        let reply = match response.text() {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "reply could not be extracted; history unchanged");
                return Err(e);
            }
        };

        history.push(user_turn);
        history.push(Content::model(reply.clone()));
        debug!(turns = history.len(), "chat turn committed");

        Ok(ChatReply {
            text: reply,
            usage: response.usage(),
        })
    }

    /// Snapshot of the committed history.
    pub async fn history(&self) -> Vec<Content> {
        self.history.lock().await.clone()
    }

    fn build_request(&self, history: &[Content], user_turn: &Content) -> GenerateContentRequest {
        let mut contents = Vec::with_capacity(history.len() + 1);
        contents.extend_from_slice(history);
        contents.push(user_turn.clone());

        GenerateContentRequest {
            contents,
            generation_config: self.params.generation_config.clone(),
            safety_settings: self.params.safety_settings.clone(),
            system_instruction: self.params.system_instruction.as_ref().map(|text| {
                SystemInstruction {
                    parts: vec![Part { text: text.clone() }],
                }
            }),
        }
    }
}
