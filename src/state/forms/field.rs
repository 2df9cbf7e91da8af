//! Form field names and value objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Addressable fields of the demo form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Text,
    Radio,
    Dropdown,
    Date,
    CheckboxOption1,
    CheckboxOption2,
    Slider,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 7] = [
        FieldName::Text,
        FieldName::Radio,
        FieldName::Dropdown,
        FieldName::Date,
        FieldName::CheckboxOption1,
        FieldName::CheckboxOption2,
        FieldName::Slider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Radio => "radio",
            Self::Dropdown => "dropdown",
            Self::Date => "date",
            Self::CheckboxOption1 => "checkbox_option1",
            Self::CheckboxOption2 => "checkbox_option2",
            Self::Slider => "slider",
        }
    }

    /// Label shown next to the widget
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text Input (3-50 chars)",
            Self::Radio => "Radio Input (Required)",
            Self::Dropdown => "Dropdown Input (Required)",
            Self::Date => "Date Input (Required)",
            Self::CheckboxOption1 => "Checkbox Option 1",
            Self::CheckboxOption2 => "Checkbox Option 2",
            Self::Slider => "Slider",
        }
    }

    /// Helper text shown under the widget when it has no error
    pub fn helper_text(&self) -> Option<&'static str> {
        match self {
            Self::Text => Some("Enter 3-50 characters"),
            Self::Date => Some("Select a valid date (not future)"),
            _ => None,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value carried by a field-change event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    Flag(bool),
    Number(i64),
    Date(NaiveDate),
}

impl FieldValue {
    /// Whether the value counts as missing for a required check.
    /// Text is trimmed first.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Stringified form used when a non-text value lands in a text field
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Date(d) => d.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Wire format of the date input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a raw date string, returning `None` for anything malformed
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Radio group selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RadioChoice {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "option1")]
    Option1,
    #[serde(rename = "option2")]
    Option2,
}

impl RadioChoice {
    pub const OPTIONS: [RadioChoice; 2] = [RadioChoice::Option1, RadioChoice::Option2];

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "option1" => Self::Option1,
            "option2" => Self::Option2,
            _ => Self::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Option1 => "option1",
            Self::Option2 => "option2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Option1 => "Radio Option 1",
            Self::Option2 => "Radio Option 2",
        }
    }

    /// Cycle forward through the options; unset selects the first
    pub fn next(&self) -> Self {
        match self {
            Self::Unset | Self::Option2 => Self::Option1,
            Self::Option1 => Self::Option2,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Unset | Self::Option1 => Self::Option2,
            Self::Option2 => Self::Option1,
        }
    }
}

/// Dropdown selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DropdownChoice {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "item1")]
    Item1,
    #[serde(rename = "item2")]
    Item2,
    #[serde(rename = "item3")]
    Item3,
}

impl DropdownChoice {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "item1" => Self::Item1,
            "item2" => Self::Item2,
            "item3" => Self::Item3,
            _ => Self::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Item1 => "item1",
            Self::Item2 => "item2",
            Self::Item3 => "item3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Item1 => "Item 1",
            Self::Item2 => "Item 2",
            Self::Item3 => "Item 3",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Unset | Self::Item3 => Self::Item1,
            Self::Item1 => Self::Item2,
            Self::Item2 => Self::Item3,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Unset | Self::Item1 => Self::Item3,
            Self::Item2 => Self::Item1,
            Self::Item3 => Self::Item2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_matches_form_layout() {
        let mut sorted = FieldName::ALL;
        sorted.sort();
        assert_eq!(sorted, FieldName::ALL);
    }

    #[test]
    fn test_field_name_display() {
        assert_eq!(FieldName::CheckboxOption1.to_string(), "checkbox_option1");
        assert_eq!(FieldName::Slider.to_string(), "slider");
    }

    #[test]
    fn test_helper_text_only_on_text_and_date() {
        assert_eq!(FieldName::Text.helper_text(), Some("Enter 3-50 characters"));
        assert_eq!(
            FieldName::Date.helper_text(),
            Some("Select a valid date (not future)")
        );
        assert!(FieldName::Radio.helper_text().is_none());
        assert!(FieldName::Slider.helper_text().is_none());
    }

    #[test]
    fn test_is_blank_trims_text() {
        assert!(FieldValue::Empty.is_blank());
        assert!(FieldValue::Text("   ".to_string()).is_blank());
        assert!(!FieldValue::Text(" a ".to_string()).is_blank());
        assert!(!FieldValue::Number(0).is_blank());
        assert!(!FieldValue::Flag(false).is_blank());
    }

    #[test]
    fn test_parse_date_accepts_iso_only() {
        assert_eq!(
            parse_date(" 2024-02-29 "),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert!(parse_date("2023-02-29").is_none());
        assert!(parse_date("29/02/2024").is_none());
        assert!(parse_date("2024-02").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_radio_parse_unknown_is_unset() {
        assert_eq!(RadioChoice::parse("option2"), RadioChoice::Option2);
        assert_eq!(RadioChoice::parse("option3"), RadioChoice::Unset);
        assert_eq!(RadioChoice::parse(""), RadioChoice::Unset);
    }

    #[test]
    fn test_radio_cycle_from_unset() {
        assert_eq!(RadioChoice::Unset.next(), RadioChoice::Option1);
        assert_eq!(RadioChoice::Unset.prev(), RadioChoice::Option2);
        assert_eq!(RadioChoice::Option2.next(), RadioChoice::Option1);
    }

    #[test]
    fn test_dropdown_cycle_wraps() {
        let mut choice = DropdownChoice::Unset;
        for expected in [
            DropdownChoice::Item1,
            DropdownChoice::Item2,
            DropdownChoice::Item3,
        ] {
            choice = choice.next();
            assert_eq!(choice, expected);
        }
        assert_eq!(choice.next(), DropdownChoice::Item1);
        assert_eq!(DropdownChoice::Item1.prev(), DropdownChoice::Item3);
    }

    #[test]
    fn test_unset_choices_serialize_as_empty_string() {
        assert_eq!(serde_json::to_string(&RadioChoice::Unset).unwrap(), "\"\"");
        assert_eq!(
            serde_json::to_string(&DropdownChoice::Item2).unwrap(),
            "\"item2\""
        );
    }
}
