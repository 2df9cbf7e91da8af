//! Demo form rendering

use super::field_renderer::{
    border_color, draw_field, draw_helper_text, slider_track, text_content, FieldView,
    FIELD_HEIGHT,
};
use crate::app::App;
use crate::state::{
    DropdownChoice, FieldName, Focus, FormSnapshot, RadioChoice, DATE_FORMAT, SLIDER_MAX,
    SLIDER_MIN,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the whole form inside `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let block = Block::default()
        .title(Span::styled(
            " Form Demo ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Text
            Constraint::Length(FIELD_HEIGHT),  // Radio
            Constraint::Length(FIELD_HEIGHT),  // Dropdown
            Constraint::Length(FIELD_HEIGHT),  // Date
            Constraint::Length(3),             // Checkboxes
            Constraint::Length(FIELD_HEIGHT),  // Slider
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_text(frame, chunks[0], app, snapshot);
    draw_radio(frame, chunks[1], app, snapshot);
    draw_dropdown(frame, chunks[2], app, snapshot);
    draw_date(frame, chunks[3], app, snapshot);
    draw_checkboxes(frame, chunks[4], app, snapshot);
    draw_slider(frame, chunks[5], app, snapshot);

    render_button(
        frame,
        chunks[6],
        "SUBMIT",
        app.state.focus == Focus::SubmitButton,
        app.engine.is_valid(),
    );
    render_button(
        frame,
        chunks[7],
        "RESET",
        app.state.focus == Focus::ResetButton,
        snapshot.dirty,
    );
}

fn error_for(snapshot: &FormSnapshot, field: FieldName) -> Option<&'static str> {
    snapshot.results.get(&field).and_then(|r| r.message)
}

fn draw_text(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let is_active = app.state.focus == Focus::Text;
    draw_field(
        frame,
        area,
        FieldView {
            label: FieldName::Text.label(),
            content: text_content(&snapshot.state.text, "", is_active),
            is_active,
            error: error_for(snapshot, FieldName::Text),
            helper: FieldName::Text.helper_text(),
        },
    );
}

fn draw_date(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let is_active = app.state.focus == Focus::Date;
    // Empty buffer falls back to the stored date
    let shown = match (&snapshot.state.date, app.state.date_input.is_empty()) {
        (Some(date), true) => date.format(DATE_FORMAT).to_string(),
        _ => app.state.date_input.clone(),
    };
    draw_field(
        frame,
        area,
        FieldView {
            label: FieldName::Date.label(),
            content: text_content(&shown, "YYYY-MM-DD", is_active),
            is_active,
            error: error_for(snapshot, FieldName::Date),
            helper: FieldName::Date.helper_text(),
        },
    );
}

/// Render a row of mutually exclusive options, marking the selected one
fn option_row<'a>(labels: &[(&'a str, bool)], is_active: bool) -> Line<'a> {
    let mut spans = Vec::new();
    for (label, selected) in labels {
        let marker = if *selected { "(•) " } else { "( ) " };
        let style = if *selected && is_active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if *selected {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(marker, style));
        spans.push(Span::styled(*label, style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

fn draw_radio(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let is_active = app.state.focus == Focus::Radio;
    let current = snapshot.state.radio;
    let labels: Vec<(&str, bool)> = RadioChoice::OPTIONS
        .iter()
        .map(|choice| (choice.label(), *choice == current))
        .collect();
    draw_field(
        frame,
        area,
        FieldView {
            label: FieldName::Radio.label(),
            content: option_row(&labels, is_active),
            is_active,
            error: error_for(snapshot, FieldName::Radio),
            helper: None,
        },
    );
}

fn draw_dropdown(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let is_active = app.state.focus == Focus::Dropdown;
    let current = snapshot.state.dropdown;
    let content = match current {
        DropdownChoice::Unset => Line::from(Span::styled(
            "Select…",
            Style::default().fg(Color::DarkGray),
        )),
        choice => {
            let style = if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                Span::styled(choice.label(), style),
                Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
            ])
        }
    };
    draw_field(
        frame,
        area,
        FieldView {
            label: FieldName::Dropdown.label(),
            content,
            is_active,
            error: error_for(snapshot, FieldName::Dropdown),
            helper: None,
        },
    );
}

fn draw_checkboxes(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let checkbox = snapshot.state.checkbox;
    let group_active = matches!(
        app.state.focus,
        Focus::CheckboxOption1 | Focus::CheckboxOption2
    );

    let item = |label: &'static str, checked: bool, focused: bool| {
        let marker = if checked { "[x] " } else { "[ ] " };
        let style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        vec![
            Span::styled(marker, style),
            Span::styled(label, style),
            Span::raw("   "),
        ]
    };

    let mut spans = item(
        FieldName::CheckboxOption1.label(),
        checkbox.option1,
        app.state.focus == Focus::CheckboxOption1,
    );
    spans.extend(item(
        FieldName::CheckboxOption2.label(),
        checkbox.option2,
        app.state.focus == Focus::CheckboxOption2,
    ));

    let block = Block::default()
        .title(" Checkbox Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(group_active, false)));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_slider(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let is_active = app.state.focus == Focus::Slider;
    let error = error_for(snapshot, FieldName::Slider);
    let value = snapshot.state.slider;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .title(format!(" {} ", FieldName::Slider.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, error.is_some())));

    // Leave room for the value label
    let track_width = block.inner(chunks[0]).width.saturating_sub(5) as usize;
    let track_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled(
            slider_track(value, SLIDER_MIN, SLIDER_MAX, track_width),
            track_style,
        ),
        Span::raw(format!(" {value:>3}")),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), chunks[0]);
    draw_helper_text(frame, chunks[1], error, None);
}
