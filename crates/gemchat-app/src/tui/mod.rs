//! Terminal UI: transcript, error banner, input line, status bar.

mod event;
mod terminal;
mod ui;


pub use event::{handle_key, poll_event, TuiEvent};
pub use terminal::{init_terminal, restore_terminal, Tui};
pub use ui::render;

use std::time::Duration;

use crate::chat::ChatApp;

/// How long to wait for a key before checking for replies again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the UI loop until the user quits.
pub fn run(terminal: &mut Tui, app: &mut ChatApp) -> std::io::Result<()> {
    let mut needs_redraw = true;

    while !app.should_quit() {
        if app.poll_events() {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|frame| render(app, frame))?;
            needs_redraw = false;
        }

        match poll_event(POLL_INTERVAL)? {
            Some(TuiEvent::Key(key)) => {
                handle_key(app, key);
                needs_redraw = true;
            }
            Some(TuiEvent::Resize) => needs_redraw = true,
            None => {}
        }
    }

    Ok(())
}
