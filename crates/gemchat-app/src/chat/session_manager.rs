//! Session manager: builds the remote chat session once at startup.

use std::sync::Arc;
use std::time::Duration;

use gemchat_ai::{
    AiError, ChatSession, Content, GeminiClient, GeminiConfig, GenerationConfig,
    GenerativeModel, HarmBlockThreshold, HarmCategory, SafetySetting, StartChatParams,
};
use gemchat_config::schema::BlockThreshold;
use gemchat_config::GemchatConfig;
use tracing::{error, info};

use super::state::ChatApp;
use super::types::INIT_FAILED_MESSAGE;

impl ChatApp {
    /// Establish the remote session.
    ///
    /// `open` receives the transcript as it stands now (empty on a fresh
    /// start) and returns the session seeded with it. Runs at most once:
    /// later calls are ignored, so a handle is never replaced and a failed
    /// start is never retried.
    pub fn initialize<F>(&mut self, open: F)
    where
        F: FnOnce(Vec<Content>) -> Result<ChatSession, AiError>,
    {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let history: Vec<Content> = self.messages.iter().map(|m| m.to_content()).collect();
        match open(history) {
            Ok(session) => {
                info!(model = %session.model_name(), "chat session ready");
                self.session = Some(Arc::new(session));
            }
            Err(e) => {
                error!(error = %e, "chat session could not be initialized");
                self.error = Some(INIT_FAILED_MESSAGE.to_string());
            }
        }
    }
}

/// Build the Gemini client from config and start a chat seeded with
/// `history`.
pub fn open_session(config: &GemchatConfig, history: Vec<Content>) -> Result<ChatSession, AiError> {
    let api_key = gemchat_config::resolve_api_key(&config.api)
        .ok_or_else(|| AiError::MissingCredential(config.api.api_key_env.clone()))?;

    let request_timeout = match config.api.request_timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(u64::from(secs))),
    };
    let gemini = GeminiConfig::new(api_key)
        .with_model(config.model.name.clone())
        .with_base_url(config.api.base_url.clone())
        .with_connect_timeout(Duration::from_secs(u64::from(config.api.connect_timeout_secs)))
        .with_request_timeout(request_timeout);

    let client = GeminiClient::new(gemini)?;
    let model = GenerativeModel::new(Arc::new(client));
    model.start_chat(start_params(config, history))
}

/// The fixed generation and safety parameters for a session.
pub fn start_params(config: &GemchatConfig, history: Vec<Content>) -> StartChatParams {
    let generation = &config.generation;
    let safety = &config.safety;

    StartChatParams {
        generation_config: Some(GenerationConfig {
            temperature: generation.temperature,
            top_p: generation.top_p,
            top_k: generation.top_k,
            max_output_tokens: generation.max_output_tokens,
            response_mime_type: generation.response_mime_type.clone(),
        }),
        safety_settings: vec![
            safety_setting(HarmCategory::Harassment, safety.harassment),
            safety_setting(HarmCategory::HateSpeech, safety.hate_speech),
            safety_setting(HarmCategory::SexuallyExplicit, safety.sexually_explicit),
            safety_setting(HarmCategory::DangerousContent, safety.dangerous_content),
        ],
        system_instruction: config.model.system_instruction.clone(),
        history,
    }
}

fn safety_setting(category: HarmCategory, threshold: BlockThreshold) -> SafetySetting {
    let threshold = match threshold {
        BlockThreshold::BlockLowAndAbove => HarmBlockThreshold::BlockLowAndAbove,
        BlockThreshold::BlockMediumAndAbove => HarmBlockThreshold::BlockMediumAndAbove,
        BlockThreshold::BlockOnlyHigh => HarmBlockThreshold::BlockOnlyHigh,
        BlockThreshold::BlockNone => HarmBlockThreshold::BlockNone,
    };
    SafetySetting {
        category,
        threshold,
    }
}
