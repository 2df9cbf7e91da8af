//! Form state value object

use super::field::{parse_date, DropdownChoice, FieldName, FieldValue, RadioChoice};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Slider domain; input outside it is clamped
pub const SLIDER_MIN: i64 = 0;
pub const SLIDER_MAX: i64 = 100;
pub const SLIDER_DEFAULT: i64 = 30;

/// The two independent checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckboxGroup {
    pub option1: bool,
    pub option2: bool,
}

/// Current values of every field for one form session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub text: String,
    pub radio: RadioChoice,
    pub dropdown: DropdownChoice,
    pub date: Option<NaiveDate>,
    pub checkbox: CheckboxGroup,
    pub slider: i64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            radio: RadioChoice::Unset,
            dropdown: DropdownChoice::Unset,
            date: None,
            checkbox: CheckboxGroup::default(),
            slider: SLIDER_DEFAULT,
        }
    }
}

impl FormState {
    /// Typed view of a field, as consumed by the rule evaluator
    pub fn value(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Text => FieldValue::Text(self.text.clone()),
            FieldName::Radio => match self.radio {
                RadioChoice::Unset => FieldValue::Empty,
                choice => FieldValue::Text(choice.as_str().to_string()),
            },
            FieldName::Dropdown => match self.dropdown {
                DropdownChoice::Unset => FieldValue::Empty,
                choice => FieldValue::Text(choice.as_str().to_string()),
            },
            FieldName::Date => self.date.map_or(FieldValue::Empty, FieldValue::Date),
            FieldName::CheckboxOption1 => FieldValue::Flag(self.checkbox.option1),
            FieldName::CheckboxOption2 => FieldValue::Flag(self.checkbox.option2),
            FieldName::Slider => FieldValue::Number(self.slider),
        }
    }

    /// Normalize a raw value into the field.
    ///
    /// Malformed input never fails: choices fall back to unset, dates to
    /// `None`, checkboxes to `false`. Returns `false` only when the value was
    /// ignored outright (a non-numeric slider value).
    pub fn apply(&mut self, field: FieldName, value: FieldValue) -> bool {
        match field {
            FieldName::Text => self.text = value.to_text(),
            FieldName::Radio => {
                self.radio = match &value {
                    FieldValue::Text(s) => RadioChoice::parse(s),
                    _ => RadioChoice::Unset,
                }
            }
            FieldName::Dropdown => {
                self.dropdown = match &value {
                    FieldValue::Text(s) => DropdownChoice::parse(s),
                    _ => DropdownChoice::Unset,
                }
            }
            FieldName::Date => {
                self.date = match &value {
                    FieldValue::Date(d) => Some(*d),
                    FieldValue::Text(s) => parse_date(s),
                    _ => None,
                }
            }
            FieldName::CheckboxOption1 => self.checkbox.option1 = coerce_flag(&value),
            FieldName::CheckboxOption2 => self.checkbox.option2 = coerce_flag(&value),
            FieldName::Slider => {
                let number = match &value {
                    FieldValue::Number(n) => Some(*n),
                    FieldValue::Text(s) => s.trim().parse::<i64>().ok(),
                    _ => None,
                };
                match number {
                    Some(n) => self.slider = n.clamp(SLIDER_MIN, SLIDER_MAX),
                    None => return false,
                }
            }
        }
        true
    }

    /// Fields whose value differs from the default
    pub fn dirty_fields(&self) -> Vec<FieldName> {
        let defaults = FormState::default();
        FieldName::ALL
            .into_iter()
            .filter(|&field| self.value(field) != defaults.value(field))
            .collect()
    }
}

fn coerce_flag(value: &FieldValue) -> bool {
    match value {
        FieldValue::Flag(b) => *b,
        FieldValue::Number(n) => *n != 0,
        FieldValue::Text(s) => matches!(s.trim(), "true" | "on" | "1"),
        FieldValue::Empty | FieldValue::Date(_) => false,
    }
}
