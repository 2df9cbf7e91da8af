//! Declarative per-field rules and the generic evaluator

use super::field::{FieldName, FieldValue};
use chrono::{Months, NaiveDate};
use serde::Serialize;

/// A single constraint on a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Min(i64),
    Max(i64),
    /// Date must not be after today
    NotFuture,
    /// Date must not be earlier than today minus the given years
    MaxAgeYears(u32),
}

/// A rule paired with the message reported when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub rule: Rule,
    pub message: &'static str,
}

const fn rule(rule: Rule, message: &'static str) -> FieldRule {
    FieldRule { rule, message }
}

const TEXT_RULES: &[FieldRule] = &[
    rule(Rule::Required, "This field is required"),
    rule(Rule::MinLength(3), "Minimum 3 characters required"),
    rule(Rule::MaxLength(50), "Maximum 50 characters allowed"),
];

const CHOICE_RULES: &[FieldRule] = &[rule(Rule::Required, "Please select an option")];

const DATE_RULES: &[FieldRule] = &[
    rule(Rule::Required, "Please select a date"),
    rule(Rule::NotFuture, "Date cannot be in the future"),
    rule(Rule::MaxAgeYears(100), "Date cannot be more than 100 years ago"),
];

const SLIDER_RULES: &[FieldRule] = &[
    rule(Rule::Min(10), "Minimum value is 10"),
    rule(Rule::Max(90), "Maximum value is 90"),
];

/// Ordered rules for a field; the first failure wins
pub fn rules_for(field: FieldName) -> &'static [FieldRule] {
    match field {
        FieldName::Text => TEXT_RULES,
        FieldName::Radio | FieldName::Dropdown => CHOICE_RULES,
        FieldName::Date => DATE_RULES,
        FieldName::Slider => SLIDER_RULES,
        FieldName::CheckboxOption1 | FieldName::CheckboxOption2 => &[],
    }
}

/// Outcome of validating one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl ValidationResult {
    pub const VALID: ValidationResult = ValidationResult {
        valid: true,
        message: None,
    };

    pub fn invalid(message: &'static str) -> Self {
        Self {
            valid: false,
            message: Some(message),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::VALID
    }
}

/// Evaluate rules in order and report the first one that fails.
///
/// Rules other than `Required` are skipped for blank values, and rules that
/// don't apply to the value's kind always pass.
pub fn evaluate(rules: &[FieldRule], value: &FieldValue, today: NaiveDate) -> ValidationResult {
    let blank = value.is_blank();
    for field_rule in rules {
        let passes = match field_rule.rule {
            Rule::Required => !blank,
            _ if blank => true,
            rule => check(rule, value, today),
        };
        if !passes {
            return ValidationResult::invalid(field_rule.message);
        }
    }
    ValidationResult::VALID
}

fn check(rule: Rule, value: &FieldValue, today: NaiveDate) -> bool {
    match (rule, value) {
        (Rule::MinLength(min), FieldValue::Text(s)) => s.chars().count() >= min,
        (Rule::MaxLength(max), FieldValue::Text(s)) => s.chars().count() <= max,
        (Rule::Min(min), FieldValue::Number(n)) => *n >= min,
        (Rule::Max(max), FieldValue::Number(n)) => *n <= max,
        (Rule::NotFuture, FieldValue::Date(d)) => *d <= today,
        (Rule::MaxAgeYears(years), FieldValue::Date(d)) => {
            // Month arithmetic clamps Feb 29 to Feb 28 in non-leap years
            match today.checked_sub_months(Months::new(years * 12)) {
                Some(earliest) => *d >= earliest,
                None => true,
            }
        }
        _ => true,
    }
}
