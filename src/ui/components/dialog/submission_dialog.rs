//! Dialog showing the values of a successful submission

use super::base::{render_dialog, DialogConfig};
use crate::state::Submission;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the submitted form data centered on the screen
pub fn render_submission_dialog(frame: &mut Frame, submission: &Submission) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];

    let message = submission.data_json();
    render_dialog(
        frame,
        DialogConfig {
            title: "Form Data",
            title_color: Color::Green,
            border_color: Color::Green,
            message: &message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
