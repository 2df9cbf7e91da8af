//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, status_area) = layout::create_layout(frame.area());
    let snapshot = app.engine.snapshot();

    forms::draw_demo_form(frame, form_area, app, &snapshot);
    layout::draw_status_bar(frame, status_area, app, &snapshot);

    if let Some(submission) = &app.state.submission {
        components::render_submission_dialog(frame, submission);
    }
}
