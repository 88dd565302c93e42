//! ChatApp struct definition, constructor, and UI-facing accessors.

use std::sync::Arc;

use gemchat_ai::{ChatSession, TokenTracker};
use gemchat_config::schema::UiConfig;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use super::message::Message;
use super::types::ChatEvent;

/// Top-level chat state, owned by the UI thread.
pub struct ChatApp {
    pub(super) ui: UiConfig,
    pub(super) model_name: String,

    // Append-only transcript; insertion order is display order.
    pub(super) messages: Vec<Message>,
    pub(super) input: String,
    pub(super) error: Option<String>,

    // Remote session, set at most once by `initialize`.
    pub(super) session: Option<Arc<ChatSession>>,
    pub(super) initialized: bool,

    // Where requests run and how their results come back.
    pub(super) runtime: Handle,
    pub(super) event_tx: UnboundedSender<ChatEvent>,
    pub(super) event_rx: UnboundedReceiver<ChatEvent>,
    pub(super) in_flight: usize,

    pub(super) tracker: TokenTracker,
    pub(super) scroll_offset: usize,
    pub(super) should_quit: bool,
}

impl ChatApp {
    pub fn new(ui: UiConfig, model_name: impl Into<String>, runtime: Handle) -> Self {
        let (event_tx, event_rx) = unbounded_channel();
        Self {
            ui,
            model_name: model_name.into(),
            messages: Vec::new(),
            input: String::new(),
            error: None,
            session: None,
            initialized: false,
            runtime,
            event_tx,
            event_rx,
            in_flight: 0,
            tracker: TokenTracker::new(),
            scroll_offset: 0,
            should_quit: false,
        }
    }

    // -- Input editing --

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    // -- Scrolling (offset counts lines up from the bottom) --

    pub fn scroll_up(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
    }

    /// Cap the offset once the renderer knows how many lines exist.
    pub fn clamp_scroll(&mut self, max: usize) {
        self.scroll_offset = self.scroll_offset.min(max);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // -- Getters --

    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
