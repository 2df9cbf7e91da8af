//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppState, FieldName, FieldValue, Focus, FormValidationEngine, StatusMessage, Submission,
    SLIDER_MAX, SLIDER_MIN,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest raw text accepted by the date input (YYYY-MM-DD)
const DATE_INPUT_LEN: usize = 10;

/// Main application struct
pub struct App {
    /// UI-side state (focus, date buffer, dialog)
    pub state: AppState,
    /// Owns the form values and their validation
    pub engine: FormValidationEngine,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            engine: FormValidationEngine::new(config.engine_options()),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.state.submission.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.submission = None;
            }
            return;
        }

        let shortcut = key
            .modifiers
            .intersects(crate::platform::SHORTCUT_MODIFIER | KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('r') if shortcut => self.reset(),
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Esc => self.quit = true,
            // Enter submits from anywhere except the reset button
            KeyCode::Enter => match self.state.focus {
                Focus::ResetButton => self.reset(),
                _ => self.submit(),
            },
            _ => self.handle_field_key(key),
        }
    }

    /// Handle keys that edit the focused field
    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(field) = self.state.focus.field() else {
            return;
        };
        // Ctrl/Alt chords never type into a field
        if matches!(key.code, KeyCode::Char(_))
            && !key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
        {
            return;
        }
        let form = self.engine.state();
        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            10
        } else {
            1
        };

        let value = match (field, key.code) {
            (FieldName::Text, KeyCode::Char(c)) => {
                let mut text = form.text.clone();
                text.push(c);
                FieldValue::Text(text)
            }
            (FieldName::Text, KeyCode::Backspace) => {
                let mut text = form.text.clone();
                if text.pop().is_none() {
                    return;
                }
                FieldValue::Text(text)
            }
            (FieldName::Date, KeyCode::Char(c)) => {
                if !(c.is_ascii_digit() || c == '-')
                    || self.state.date_input.len() >= DATE_INPUT_LEN
                {
                    return;
                }
                self.state.date_input.push(c);
                FieldValue::Text(self.state.date_input.clone())
            }
            (FieldName::Date, KeyCode::Backspace) => {
                if self.state.date_input.pop().is_none() {
                    return;
                }
                FieldValue::Text(self.state.date_input.clone())
            }
            (FieldName::Radio, KeyCode::Left) => {
                FieldValue::Text(form.radio.prev().as_str().to_string())
            }
            (FieldName::Radio, KeyCode::Right | KeyCode::Char(' ')) => {
                FieldValue::Text(form.radio.next().as_str().to_string())
            }
            (FieldName::Dropdown, KeyCode::Left) => {
                FieldValue::Text(form.dropdown.prev().as_str().to_string())
            }
            (FieldName::Dropdown, KeyCode::Right | KeyCode::Char(' ')) => {
                FieldValue::Text(form.dropdown.next().as_str().to_string())
            }
            (FieldName::CheckboxOption1, KeyCode::Char(' ')) => {
                FieldValue::Flag(!form.checkbox.option1)
            }
            (FieldName::CheckboxOption2, KeyCode::Char(' ')) => {
                FieldValue::Flag(!form.checkbox.option2)
            }
            (FieldName::Slider, KeyCode::Left) => FieldValue::Number(form.slider - step),
            (FieldName::Slider, KeyCode::Right) => FieldValue::Number(form.slider + step),
            (FieldName::Slider, KeyCode::Home) => FieldValue::Number(SLIDER_MIN),
            (FieldName::Slider, KeyCode::End) => FieldValue::Number(SLIDER_MAX),
            _ => return,
        };

        self.engine.set_field(field, value);
    }

    /// Submit the form, logging the data on success
    pub fn submit(&mut self) {
        match self.engine.submit() {
            Ok(data) => {
                let submission = Submission::new(data);
                match serde_json::to_string(&submission) {
                    Ok(json) => tracing::info!("Form data: {json}"),
                    Err(e) => tracing::warn!("Failed to serialize form data: {e}"),
                }
                self.state.status_message =
                    Some(StatusMessage::Success("Form submitted".to_string()));
                self.state.submission = Some(submission);
            }
            Err(failure) => {
                // Move focus to the first field that needs fixing
                if let Some(first) = failure.errors.first() {
                    self.state.focus = Focus::from_field(first.field);
                }
                self.state.status_message = Some(StatusMessage::Error(failure.to_string()));
            }
        }
    }

    /// Reset the form to its defaults
    pub fn reset(&mut self) {
        self.engine.reset();
        self.state.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DropdownChoice, RadioChoice};

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn focus(app: &mut App, target: Focus) {
        app.state.focus = target;
    }

    /// Fill every required field with a valid value via key presses
    fn fill_valid(app: &mut App) {
        focus(app, Focus::Text);
        type_str(app, "hello");
        focus(app, Focus::Radio);
        press(app, KeyCode::Right);
        focus(app, Focus::Dropdown);
        press(app, KeyCode::Right);
        press(app, KeyCode::Right);
        focus(app, Focus::Date);
        type_str(app, "2000-01-01");
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_into_text() {
            let mut app = app();
            type_str(&mut app, "abc");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.engine.state().text, "ab");
        }

        #[test]
        fn test_modifier_chords_are_not_typed() {
            let mut app = app();
            app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
            app.handle_key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));
            assert_eq!(app.engine.state().text, "B");

            focus(&mut app, Focus::Date);
            app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT));
            assert_eq!(app.state.date_input, "");
        }

        #[test]
        fn test_backspace_on_empty_text_is_noop() {
            let mut app = app();
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.engine.state().text, "");
            assert!(!app.engine.is_dirty());
        }

        #[test]
        fn test_date_buffer_filters_input() {
            let mut app = app();
            focus(&mut app, Focus::Date);
            type_str(&mut app, "2000-0x1-01");
            assert_eq!(app.state.date_input, "2000-01-01");
            assert!(app.engine.state().date.is_some());
            type_str(&mut app, "9");
            assert_eq!(app.state.date_input, "2000-01-01");
        }

        #[test]
        fn test_partial_date_is_unset() {
            let mut app = app();
            focus(&mut app, Focus::Date);
            type_str(&mut app, "2000-01-01");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.date_input, "2000-01-0");
            assert!(app.engine.state().date.is_none());
        }

        #[test]
        fn test_radio_and_dropdown_cycle() {
            let mut app = app();
            focus(&mut app, Focus::Radio);
            press(&mut app, KeyCode::Left);
            assert_eq!(app.engine.state().radio, RadioChoice::Option2);
            focus(&mut app, Focus::Dropdown);
            press(&mut app, KeyCode::Char(' '));
            assert_eq!(app.engine.state().dropdown, DropdownChoice::Item1);
        }

        #[test]
        fn test_checkbox_toggle() {
            let mut app = app();
            focus(&mut app, Focus::CheckboxOption2);
            press(&mut app, KeyCode::Char(' '));
            assert!(app.engine.state().checkbox.option2);
            press(&mut app, KeyCode::Char(' '));
            assert!(!app.engine.state().checkbox.option2);
            assert!(!app.engine.state().checkbox.option1);
        }

        #[test]
        fn test_slider_steps_and_clamps() {
            let mut app = app();
            focus(&mut app, Focus::Slider);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.engine.state().slider, 31);
            app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT));
            assert_eq!(app.engine.state().slider, 21);
            press(&mut app, KeyCode::End);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.engine.state().slider, 100);
            press(&mut app, KeyCode::Home);
            assert_eq!(app.engine.state().slider, 0);
        }

        #[test]
        fn test_tab_moves_focus() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.focus, Focus::Radio);
            press(&mut app, KeyCode::BackTab);
            press(&mut app, KeyCode::BackTab);
            assert_eq!(app.state.focus, Focus::ResetButton);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_failed_submit_focuses_first_error() {
            let mut app = app();
            focus(&mut app, Focus::Text);
            type_str(&mut app, "hello");
            focus(&mut app, Focus::SubmitButton);
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.focus, Focus::Radio);
            assert!(app.state.submission.is_none());
            assert_eq!(
                app.state.status_message,
                Some(StatusMessage::Error("3 field(s) failed validation".to_string()))
            );
            assert!(app.engine.error(FieldName::Radio).is_some());
        }

        #[test]
        fn test_successful_submit_opens_dialog() {
            let mut app = app();
            fill_valid(&mut app);
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

            let submission = app.state.submission.as_ref().expect("dialog expected");
            assert_eq!(submission.data.text, "hello");
            assert_eq!(submission.data.radio, RadioChoice::Option1);
            assert_eq!(submission.data.dropdown, DropdownChoice::Item2);
            assert_eq!(submission.data.slider, 30);

            // Dialog swallows keys until dismissed
            press(&mut app, KeyCode::Char('x'));
            assert_eq!(app.engine.state().text, "hello");
            press(&mut app, KeyCode::Esc);
            assert!(app.state.submission.is_none());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_advisory_submit_reports_success() {
            let config = TuiConfig {
                slider_policy: Some(crate::state::SliderPolicy::Advisory),
                ..TuiConfig::default()
            };
            let mut app = App::new(&config);
            fill_valid(&mut app);
            focus(&mut app, Focus::Slider);
            press(&mut app, KeyCode::End);
            app.submit();

            assert!(app.engine.error(FieldName::Slider).is_some());
            let status = app.state.status_message.as_ref().expect("status expected");
            assert!(!status.is_error());
            assert_eq!(status.text(), "Form submitted");
        }

        #[test]
        fn test_failure_status_survives_eager_clear() {
            let mut app = app();
            app.submit();
            focus(&mut app, Focus::Text);
            type_str(&mut app, "hello");
            focus(&mut app, Focus::Radio);
            press(&mut app, KeyCode::Right);
            focus(&mut app, Focus::Dropdown);
            press(&mut app, KeyCode::Right);
            focus(&mut app, Focus::Date);
            type_str(&mut app, "2000");
            assert_eq!(app.engine.error_count(), 0);
            assert!(app
                .state
                .status_message
                .as_ref()
                .is_some_and(StatusMessage::is_error));
        }

        #[test]
        fn test_editing_clears_field_error() {
            let mut app = app();
            app.submit();
            assert!(app.engine.error(FieldName::Text).is_some());
            focus(&mut app, Focus::Text);
            type_str(&mut app, "a");
            assert!(app.engine.error(FieldName::Text).is_none());
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_button_clears_everything() {
            let mut app = app();
            fill_valid(&mut app);
            app.submit();
            press(&mut app, KeyCode::Enter);
            focus(&mut app, Focus::ResetButton);
            press(&mut app, KeyCode::Enter);

            assert!(!app.engine.is_dirty());
            assert!(app.state.date_input.is_empty());
            assert!(app.state.status_message.is_none());
            assert_eq!(app.engine.submit_count(), 0);
        }

        #[test]
        fn test_reset_shortcut() {
            let mut app = app();
            type_str(&mut app, "abc");
            app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
            assert_eq!(app.engine.state().text, "");
        }
    }

    #[test]
    fn test_esc_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }
}
