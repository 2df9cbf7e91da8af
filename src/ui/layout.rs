//! Layout components (form panel, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Focus, FormSnapshot};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form panel grows
const FORM_MAX_WIDTH: u16 = 72;

/// Split the screen into a centered form panel and a bottom status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let [form_area] = Layout::horizontal([Constraint::Max(FORM_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(chunks[0]);

    (form_area, chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_focus_hints(app.state.focus)),
        Style::default().fg(Color::Gray),
    )];

    if snapshot.dirty {
        spans.push(Span::styled("● ", Style::default().fg(Color::Yellow)));
    }
    if snapshot.submit_count > 0 {
        spans.push(Span::raw(format!("#{} ", snapshot.submit_count)));
    }
    let errors = app.engine.error_count();
    if errors > 0 {
        spans.push(Span::styled(
            format!("{errors} error(s) "),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        let color = if msg.is_error() {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg.text(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the focused element
fn get_focus_hints(focus: Focus) -> String {
    let edit = match focus {
        Focus::Text | Focus::Date => "type:edit",
        Focus::Radio | Focus::Dropdown => "←/→:choose",
        Focus::CheckboxOption1 | Focus::CheckboxOption2 => "Space:toggle",
        Focus::Slider => "←/→:±1  Shift:±10",
        Focus::SubmitButton | Focus::ResetButton => "Enter:press",
    };
    format!("Tab:next  {edit}  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset  Esc:quit")
}
