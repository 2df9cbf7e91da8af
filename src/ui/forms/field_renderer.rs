//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered field plus its helper line
pub const FIELD_HEIGHT: u16 = 4;

/// What a single field box needs to draw itself
pub struct FieldView<'a> {
    pub label: &'a str,
    pub content: Line<'a>,
    pub is_active: bool,
    /// Error currently shown for the field; replaces the helper text
    pub error: Option<&'a str>,
    pub helper: Option<&'a str>,
}

/// Border colour for a field: errors win over focus
pub fn border_color(is_active: bool, has_error: bool) -> Color {
    if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Draw a bordered field with its helper or error line underneath
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .title(format!(" {} ", view.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(view.is_active, view.error.is_some())));

    frame.render_widget(Paragraph::new(view.content).block(block), chunks[0]);
    draw_helper_text(frame, chunks[1], view.error, view.helper);
}

/// Draw the line under a field: the error in red, else the helper in gray
pub fn draw_helper_text(frame: &mut Frame, area: Rect, error: Option<&str>, helper: Option<&str>) {
    let line = match (error, helper) {
        (Some(message), _) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )),
        (None, Some(helper)) => Line::from(Span::styled(
            format!(" {helper}"),
            Style::default().fg(Color::DarkGray),
        )),
        (None, None) => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Single-line text content with a cursor when active
pub fn text_content<'a>(value: &'a str, placeholder: &'a str, is_active: bool) -> Line<'a> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    if value.is_empty() && !is_active {
        return Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
    }

    let cursor = if is_active { "▌" } else { "" };
    Line::from(vec![
        Span::styled(value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ])
}

/// Horizontal slider track of `width` cells for a value in `min..=max`
pub fn slider_track(value: i64, min: i64, max: i64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let span = (max - min).max(1);
    let offset = (value.clamp(min, max) - min) as usize;
    let knob = offset * (width - 1) / span as usize;

    let mut track = String::with_capacity(width * 3);
    for i in 0..width {
        track.push(match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        });
    }
    track
}
