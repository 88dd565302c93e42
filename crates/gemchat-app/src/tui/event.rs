//! Key event polling and dispatch.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::chat::ChatApp;

/// Lines moved by PageUp/PageDown.
const PAGE_STEP: usize = 10;

#[derive(Debug)]
pub enum TuiEvent {
    Key(KeyEvent),
    Resize,
}

/// Wait up to `timeout` for a terminal event.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(Some(TuiEvent::Key(key)));
            }
            Event::Resize(_, _) => return Ok(Some(TuiEvent::Resize)),
            _ => {}
        }
    }
    Ok(None)
}

pub fn handle_key(app: &mut ChatApp, key: KeyEvent) {
    let step = app.ui().scroll_step as usize;
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Enter => app.send(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Up => app.scroll_up(step),
        KeyCode::Down => app.scroll_down(step),
        KeyCode::PageUp => app.scroll_up(PAGE_STEP),
        KeyCode::PageDown => app.scroll_down(PAGE_STEP),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.push_char(c),
        _ => {}
    }
}
