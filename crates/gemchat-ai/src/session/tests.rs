//! Tests for chat start-up and the request cycle, against a scripted client.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use super::*;
use crate::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    HarmBlockThreshold, HarmCategory, Part, Role, SafetySetting,
};
use crate::{AiClient, AiError};

/// Replays queued responses and records every request it receives.
#[derive(Default)]
struct ScriptedClient {
    responses: Mutex<VecDeque<Result<GenerateContentResponse, AiError>>>,
    requests: Mutex<Vec<GenerateContentRequest>>,
}

impl ScriptedClient {
    fn replying(texts: &[&str]) -> Arc<Self> {
        let client = Self::default();
        for text in texts {
            client.push_ok(text);
        }
        Arc::new(client)
    }

    fn push_ok(&self, text: &str) {
        let response = serde_json::from_value(json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] }, "finishReason": "STOP" }],
            "usageMetadata": { "promptTokenCount": 3, "candidatesTokenCount": 2 }
        }))
        .unwrap();
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    fn push_err(&self, err: AiError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    fn model(&self) -> &str {
        "gemini-test"
    }

    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::NetworkError("no scripted response".into())))
    }
}

fn params() -> StartChatParams {
    StartChatParams {
        generation_config: Some(GenerationConfig {
            temperature: 0.9,
            top_p: 1.0,
            top_k: 1,
            max_output_tokens: 2048,
            response_mime_type: "text/plain".into(),
        }),
        safety_settings: vec![SafetySetting {
            category: HarmCategory::Harassment,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        }],
        system_instruction: None,
        history: vec![],
    }
}

#[tokio::test]
async fn first_message_sends_single_user_turn() {
    let client = ScriptedClient::replying(&["hi there"]);
    let model = GenerativeModel::new(client.clone());
    let chat = model.start_chat(params()).unwrap();

    let reply = chat.send_message("hello").await.unwrap();
    assert_eq!(reply.text, "hi there");
    assert_eq!(reply.usage.total_tokens(), 5);

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].contents, vec![Content::user("hello")]);
    assert_eq!(requests[0].safety_settings.len(), 1);
    assert_eq!(requests[0].generation_config.as_ref().unwrap().top_k, 1);
}

#[tokio::test]
async fn successful_turns_accumulate_in_history() {
    let client = ScriptedClient::replying(&["one", "two"]);
    let chat = GenerativeModel::new(client.clone())
        .start_chat(params())
        .unwrap();

    chat.send_message("a").await.unwrap();
    chat.send_message("b").await.unwrap();

    let second = &client.requests()[1];
    assert_eq!(
        second.contents,
        vec![
            Content::user("a"),
            Content::model("one"),
            Content::user("b"),
        ]
    );
    assert_eq!(chat.history().await.len(), 4);
}

#[tokio::test]
async fn failed_send_leaves_history_untouched() {
    let client = Arc::new(ScriptedClient::default());
    client.push_err(AiError::NetworkError("connection reset".into()));
    client.push_ok("recovered");
    let chat = GenerativeModel::new(client.clone())
        .start_chat(params())
        .unwrap();

    let err = chat.send_message("hello").await.unwrap_err();
    assert!(matches!(err, AiError::NetworkError(_)));
    assert!(chat.history().await.is_empty());

    let reply = chat.send_message("hello again").await.unwrap();
    assert_eq!(reply.text, "recovered");
    assert_eq!(client.requests()[1].contents, vec![Content::user("hello again")]);
}

#[tokio::test]
async fn blocked_reply_is_error_and_not_committed() {
    let client = Arc::new(ScriptedClient::default());
    let blocked = serde_json::from_value(json!({
        "candidates": [{ "finishReason": "SAFETY" }]
    }))
    .unwrap();
    client.responses.lock().unwrap().push_back(Ok(blocked));
    let chat = GenerativeModel::new(client).start_chat(params()).unwrap();

    let err = chat.send_message("something").await.unwrap_err();
    assert!(matches!(err, AiError::Blocked(_)));
    assert!(chat.history().await.is_empty());
}

#[tokio::test]
async fn seeded_history_is_sent_before_new_turn() {
    let client = ScriptedClient::replying(&["sure"]);
    let mut p = params();
    p.history = vec![Content::user("earlier"), Content::model("noted")];
    let chat = GenerativeModel::new(client.clone()).start_chat(p).unwrap();

    chat.send_message("now").await.unwrap();
    assert_eq!(client.requests()[0].contents.len(), 3);
}

#[tokio::test]
async fn system_instruction_is_attached() {
    let client = ScriptedClient::replying(&["ok"]);
    let mut p = params();
    p.system_instruction = Some("be brief".into());
    let chat = GenerativeModel::new(client.clone()).start_chat(p).unwrap();

    chat.send_message("hi").await.unwrap();
    let instruction = client.requests()[0].system_instruction.clone().unwrap();
    assert_eq!(instruction.parts[0].text, "be brief");
}

#[tokio::test]
async fn empty_message_is_forwarded_as_is() {
    let client = ScriptedClient::replying(&["?"]);
    let chat = GenerativeModel::new(client.clone())
        .start_chat(params())
        .unwrap();

    chat.send_message("").await.unwrap();
    assert_eq!(client.requests()[0].contents[0].parts[0].text, "");
}

#[test]
fn start_chat_rejects_history_starting_with_model() {
    let model = GenerativeModel::new(ScriptedClient::replying(&[]));
    let mut p = params();
    p.history = vec![Content::model("hello")];

    let err = model.start_chat(p).err().unwrap();
    assert!(matches!(err, AiError::InvalidHistory(_)));
}

#[test]
fn validate_history_accepts_empty_and_alternating() {
    assert!(validate_history(&[]).is_ok());
    assert!(validate_history(&[
        Content::user("a"),
        Content::model("b"),
        Content::user("c"),
    ])
    .is_ok());
}

#[test]
fn validate_history_rejects_consecutive_user_turns() {
    let err = validate_history(&[Content::user("a"), Content::user("b")]).unwrap_err();
    assert!(err.to_string().contains("turn 1 is user but model was expected"));
}

#[test]
fn validate_history_rejects_empty_parts() {
    let err = validate_history(&[Content {
        role: Role::User,
        parts: Vec::<Part>::new(),
    }])
    .unwrap_err();
    assert!(err.to_string().contains("has no parts"));
}

#[test]
fn model_name_comes_from_client() {
    let model = GenerativeModel::new(ScriptedClient::replying(&[]));
    assert_eq!(model.model_name(), "gemini-test");
}

/// Records the request, then yields before answering so a second caller
/// gets a chance to run in between.
struct YieldingClient {
    inner: Arc<ScriptedClient>,
}

#[async_trait]
impl AiClient for YieldingClient {
    fn model(&self) -> &str {
        self.inner.model()
    }

    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AiError> {
        self.inner.requests.lock().unwrap().push(request.clone());
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::NetworkError("no scripted response".into())))
    }
}

#[tokio::test]
async fn concurrent_sends_are_serialized_on_history() {
    let scripted = ScriptedClient::replying(&["first reply", "second reply"]);
    let client = Arc::new(YieldingClient {
        inner: scripted.clone(),
    });
    let chat = GenerativeModel::new(client)
        .start_chat(params())
        .unwrap();

    let (a, b) = tokio::join!(chat.send_message("one"), chat.send_message("two"));
    assert_eq!(a.unwrap().text, "first reply");
    assert_eq!(b.unwrap().text, "second reply");

    let requests = scripted.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].contents, vec![Content::user("one")]);
    assert_eq!(
        requests[1].contents,
        vec![
            Content::user("one"),
            Content::model("first reply"),
            Content::user("two"),
        ]
    );

    let history = chat.history().await;
    assert_eq!(history.len(), 4);
    assert_eq!(history[3], Content::model("second reply"));
}

#[tokio::test]
async fn failed_request_does_not_leak_into_queued_one() {
    let scripted = Arc::new(ScriptedClient::default());
    scripted.push_err(AiError::RateLimited);
    scripted.push_ok("later");
    let client = Arc::new(YieldingClient {
        inner: scripted.clone(),
    });
    let chat = GenerativeModel::new(client)
        .start_chat(params())
        .unwrap();

    let (a, b) = tokio::join!(chat.send_message("one"), chat.send_message("two"));
    assert!(matches!(a, Err(AiError::RateLimited)));
    assert_eq!(b.unwrap().text, "later");

    assert_eq!(scripted.requests()[1].contents, vec![Content::user("two")]);
    assert_eq!(chat.history().await.len(), 2);
}
