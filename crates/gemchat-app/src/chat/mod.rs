//! Conversation state: the message log, the remote session handle, and
//! the two operations that touch them.
//!
//! `initialize` (session manager) runs once at startup; `send` (dispatch)
//! runs on every submission. Replies come back from spawned tasks as
//! `ChatEvent`s and are applied on the UI thread by `poll_events`.

mod dispatch;
mod message;
mod session_manager;
mod state;
mod types;


pub use message::{ChatRole, Message};
pub use session_manager::{open_session, start_params};
pub use state::ChatApp;
pub use types::{ChatEvent, INIT_FAILED_MESSAGE, SEND_FAILED_MESSAGE};
