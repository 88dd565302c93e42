//! Generative-model client for gemchat.
//!
//! Provides the Gemini `generateContent` client and a chat session on top
//! of it:
//! - Request/response wire types (generation config, safety settings)
//! - A `ChatSession` that keeps the remote conversation history
//! - Token usage tracking

pub mod gemini;
pub mod session;
pub mod token_tracker;
pub mod types;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{ChatReply, ChatSession, GenerativeModel, StartChatParams};
pub use token_tracker::TokenTracker;
pub use types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, HarmBlockThreshold,
    HarmCategory, Part, Role, SafetySetting, TokenUsage,
};

/// A backend able to answer one `generateContent` call.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Model identifier the client talks to.
    fn model(&self) -> &str;

    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Response blocked: {0}")]
    Blocked(String),
    #[error("Invalid chat history: {0}")]
    InvalidHistory(String),
    #[error("API key not configured (set {0})")]
    MissingCredential(String),
    #[error("HTTP client error: {0}")]
    Client(String),
}
