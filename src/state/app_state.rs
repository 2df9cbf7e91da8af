//! Application state definitions

use super::forms::{FieldName, FormState};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Focusable element of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Text,
    Radio,
    Dropdown,
    Date,
    CheckboxOption1,
    CheckboxOption2,
    Slider,
    SubmitButton,
    ResetButton,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Self::Text => Self::Radio,
            Self::Radio => Self::Dropdown,
            Self::Dropdown => Self::Date,
            Self::Date => Self::CheckboxOption1,
            Self::CheckboxOption1 => Self::CheckboxOption2,
            Self::CheckboxOption2 => Self::Slider,
            Self::Slider => Self::SubmitButton,
            Self::SubmitButton => Self::ResetButton,
            Self::ResetButton => Self::Text,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Text => Self::ResetButton,
            Self::Radio => Self::Text,
            Self::Dropdown => Self::Radio,
            Self::Date => Self::Dropdown,
            Self::CheckboxOption1 => Self::Date,
            Self::CheckboxOption2 => Self::CheckboxOption1,
            Self::Slider => Self::CheckboxOption2,
            Self::SubmitButton => Self::Slider,
            Self::ResetButton => Self::SubmitButton,
        }
    }

    /// The form field under focus, `None` on the buttons
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::Text => Some(FieldName::Text),
            Self::Radio => Some(FieldName::Radio),
            Self::Dropdown => Some(FieldName::Dropdown),
            Self::Date => Some(FieldName::Date),
            Self::CheckboxOption1 => Some(FieldName::CheckboxOption1),
            Self::CheckboxOption2 => Some(FieldName::CheckboxOption2),
            Self::Slider => Some(FieldName::Slider),
            Self::SubmitButton | Self::ResetButton => None,
        }
    }

    pub fn from_field(field: FieldName) -> Self {
        match field {
            FieldName::Text => Self::Text,
            FieldName::Radio => Self::Radio,
            FieldName::Dropdown => Self::Dropdown,
            FieldName::Date => Self::Date,
            FieldName::CheckboxOption1 => Self::CheckboxOption1,
            FieldName::CheckboxOption2 => Self::CheckboxOption2,
            FieldName::Slider => Self::Slider,
        }
    }
}

/// A successful submission, logged as one JSON line
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub data: FormState,
}

impl Submission {
    pub fn new(data: FormState) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            data,
        }
    }

    /// Pretty JSON of the submitted values only
    pub fn data_json(&self) -> String {
        serde_json::to_string_pretty(&self.data).unwrap_or_else(|_| format!("{:?}", self.data))
    }
}

/// Outcome of the last submit attempt, shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// UI-side state that lives next to the engine
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: Focus,
    /// Raw date text while it is being typed
    pub date_input: String,
    /// Last submit outcome shown in the status bar
    pub status_message: Option<StatusMessage>,
    /// Shown in a dialog until dismissed
    pub submission: Option<Submission>,
}

impl AppState {
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn clear(&mut self) {
        self.date_input.clear();
        self.status_message = None;
        self.submission = None;
    }
}
