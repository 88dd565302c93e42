//! Dispatch loop: one user submission end-to-end.

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use super::message::{ChatRole, Message};
use super::state::ChatApp;
use super::types::{ChatEvent, SEND_FAILED_MESSAGE};

impl ChatApp {
    /// Submit whatever the input buffer holds.
    ///
    /// The user message is appended and the buffer cleared before any
    /// request is made. With a session, one request is spawned and its
    /// result arrives later through `poll_events`. Without one, nothing
    /// else happens. There is no in-flight guard: a second send may start
    /// while an earlier one is still waiting.
    pub fn send(&mut self) {
        let text = std::mem::take(&mut self.input);
        self.messages.push(Message::new(text.clone(), ChatRole::User));
        self.scroll_offset = 0;

        let Some(session) = self.session.clone() else {
            warn!("no chat session; message kept locally only");
            return;
        };

        self.in_flight += 1;
        let reporter = EventReporter::new(self.event_tx.clone());
        self.runtime.spawn(async move {
            let event = match session.send_message(text).await {
                Ok(reply) => ChatEvent::Reply(reply),
                Err(e) => ChatEvent::SendFailed(e.to_string()),
            };
            reporter.report(event);
        });
    }

    /// Apply finished requests (non-blocking). Returns whether anything
    /// changed.
    pub fn poll_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_event(event);
            changed = true;
        }
        changed
    }

    pub(super) fn apply_event(&mut self, event: ChatEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match event {
            ChatEvent::Reply(reply) => {
                debug!(
                    chars = reply.text.len(),
                    tokens = reply.usage.total_tokens(),
                    "reply received"
                );
                self.tracker.record(&reply.usage);
                self.messages.push(Message::new(reply.text, ChatRole::Bot));
            }
            ChatEvent::SendFailed(cause) => {
                warn!(error = %cause, "message send failed");
                self.error = Some(SEND_FAILED_MESSAGE.to_string());
            }
        }
    }
}

/// Delivers exactly one event per spawned request. If the task ends
/// without reporting (it panicked or was dropped), a failure is sent
/// instead so `in_flight` still comes back down.
pub(super) struct EventReporter {
    tx: Option<UnboundedSender<ChatEvent>>,
}

impl EventReporter {
    pub(super) fn new(tx: UnboundedSender<ChatEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    pub(super) fn report(mut self, event: ChatEvent) {
        if let Some(tx) = self.tx.take() {
            // Receiver is gone only when the app is shutting down.
            let _ = tx.send(event);
        }
    }
}

impl Drop for EventReporter {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(ChatEvent::SendFailed(
                "request task ended without a result".into(),
            ));
        }
    }
}
