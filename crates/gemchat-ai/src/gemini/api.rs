//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{AiClient, AiError};

use super::client::GeminiClient;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Pull the human-readable message out of an API error body, falling back
/// to the raw text.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[async_trait]
impl AiClient for GeminiClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AiError> {
        let url = self.api_url();

        debug!(model = %self.config.model, turns = request.contents.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!(
                "HTTP {status}: {}",
                error_message(&text)
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))
    }
}
