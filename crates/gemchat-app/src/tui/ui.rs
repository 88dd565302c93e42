//! Frame rendering.

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::chat::{ChatApp, ChatRole, Message};

/// Draw the whole screen: title | transcript | error banner | input | status.
pub fn render(app: &mut ChatApp, frame: &mut Frame) {
    let area = frame.area();
    let banner_height = u16::from(app.error().is_some());

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // title
            Constraint::Min(3),                // transcript
            Constraint::Length(banner_height), // error banner
            Constraint::Length(3),             // input
            Constraint::Length(1),             // status bar
        ])
        .split(area);

    let title = Paragraph::new(format!(" {}", app.ui().title)).style(
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, vertical[0]);

    render_transcript(app, frame, vertical[1]);

    if let Some(error) = app.error() {
        let banner = Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red));
        frame.render_widget(banner, vertical[2]);
    }

    render_input(app, frame, vertical[3]);
    render_status(app, frame, vertical[4]);
}

fn render_transcript(app: &mut ChatApp, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let visible_height = area.height.saturating_sub(2) as usize;

    let lines = transcript_lines(app.messages(), width, &app.ui().timestamp_format);
    let total_lines = lines.len();

    // Offset counts up from the bottom; clamp so the top line stays reachable.
    let max_scroll = total_lines.saturating_sub(visible_height);
    app.clamp_scroll(max_scroll);
    let top = max_scroll - app.scroll_offset();

    let title = if app.scroll_offset() > 0 {
        format!(" Conversation (+{} below) ", app.scroll_offset())
    } else {
        " Conversation ".to_string()
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

/// Lay out every message as wrapped, aligned lines followed by its label
/// and timestamp, with a blank line between messages.
pub(crate) fn transcript_lines(
    messages: &[Message],
    width: usize,
    timestamp_format: &str,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, msg) in messages.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }

        let (alignment, color) = match msg.role() {
            ChatRole::User => (Alignment::Right, Color::Red),
            ChatRole::Bot => (Alignment::Left, Color::Green),
        };

        for chunk in wrap_text(msg.text(), width) {
            lines.push(Line::from(Span::styled(chunk, Style::default().fg(color))).alignment(alignment));
        }

        let label = format!(
            "{} {}",
            msg.role().label(),
            format_timestamp(msg.timestamp(), timestamp_format)
        );
        lines.push(
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray)))
                .alignment(alignment),
        );
    }

    lines
}

/// Split on newlines (dropping a trailing `\r`), then hard-wrap each line
/// at `width` display columns. An empty text still occupies one (empty)
/// line.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if width == 0 || line.width() <= width {
            out.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        let mut columns = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if columns + w > width && !current.is_empty() {
                out.push(std::mem::take(&mut current));
                columns = 0;
            }
            current.push(c);
            columns += w;
        }
        out.push(current);
    }
    out
}

/// Format with a user-supplied strftime string; falls back to RFC 3339 if
/// the format is invalid.
pub(crate) fn format_timestamp(ts: DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", ts.format(format)).is_err() {
        return ts.to_rfc3339();
    }
    out
}

fn render_input(app: &ChatApp, frame: &mut Frame, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let input = app.input();

    let visible = input_tail(input, inner_width.saturating_sub(1));
    let paragraph = if input.is_empty() {
        Paragraph::new(app.ui().placeholder.clone()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(visible)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Message ")
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(paragraph.block(block), area);

    let cursor_x = area.x + 1 + u16::try_from(visible.width()).unwrap_or(0);
    frame.set_cursor_position((cursor_x, area.y + 1));
}

/// The longest suffix of `input` that fits in `columns`, so the end of long
/// input (where the cursor is) stays in view.
pub(crate) fn input_tail(input: &str, columns: usize) -> &str {
    let mut used = 0;
    let mut start = input.len();
    for (i, c) in input.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > columns {
            break;
        }
        used += w;
        start = i;
    }
    &input[start..]
}

fn render_status(app: &ChatApp, frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(status_text(app)).style(Style::default().bg(Color::DarkGray)),
        area,
    );
}

pub(crate) fn status_text(app: &ChatApp) -> String {
    let tracker = app.tracker();
    let mut status = format!(
        " {} │ {} messages │ {} replies │ {} tokens ({} in / {} out)",
        app.model_name(),
        app.messages().len(),
        tracker.call_count(),
        tracker.total_tokens(),
        tracker.total().input_tokens,
        tracker.total().output_tokens
    );
    if !app.has_session() {
        status.push_str(" │ offline");
    }
    match app.in_flight() {
        0 => {}
        1 => status.push_str(" │ waiting for reply"),
        n => {
            let _ = write!(status, " │ waiting for {n} replies");
        }
    }
    status.push_str(" │ [Enter] send  [↑/↓] scroll  [Esc] quit ");
    status
}
