//! Form validation engine
//!
//! Owns the [`FormState`] for one form session and the errors currently
//! shown for it. All mutation goes through [`FormValidationEngine::set_field`]
//! and [`FormValidationEngine::reset`].

use super::clock::{Clock, SystemClock};
use super::error::{ValidationError, ValidationFailure};
use super::field::{FieldName, FieldValue};
use super::form_state::FormState;
use super::rules::{evaluate, rules_for, ValidationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether an out-of-range slider blocks submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderPolicy {
    #[default]
    Blocking,
    /// Reported and displayed, but never blocks
    Advisory,
}

/// When edits re-run validation for the edited field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Edits only clear the field's error; errors appear on submit
    #[default]
    OnSubmit,
    /// Every edit re-checks the edited field
    OnChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    pub slider_policy: SliderPolicy,
    pub validation_mode: ValidationMode,
}

/// Everything a renderer needs to draw the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub state: FormState,
    pub results: BTreeMap<FieldName, ValidationResult>,
    pub submit_count: u32,
    pub dirty: bool,
}

pub struct FormValidationEngine<C: Clock = SystemClock> {
    state: FormState,
    errors: BTreeMap<FieldName, ValidationError>,
    options: EngineOptions,
    clock: C,
    submit_count: u32,
}

impl FormValidationEngine<SystemClock> {
    pub fn new(options: EngineOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl<C: Clock> FormValidationEngine<C> {
    pub fn with_clock(options: EngineOptions, clock: C) -> Self {
        Self {
            state: FormState::default(),
            errors: BTreeMap::new(),
            options,
            clock,
            submit_count: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Update one field.
    ///
    /// The field's stored error is cleared on any edit, even if the new value
    /// is still invalid. In [`ValidationMode::OnChange`] the field is then
    /// re-checked.
    pub fn set_field(&mut self, field: FieldName, value: FieldValue) {
        if !self.state.apply(field, value) {
            tracing::warn!(%field, "ignoring non-numeric slider input");
        }
        self.errors.remove(&field);
        if self.options.validation_mode == ValidationMode::OnChange {
            self.check_field(field);
        }
    }

    /// Validate a field against the current state without recording anything
    pub fn validate_field(&self, field: FieldName) -> ValidationResult {
        evaluate(
            rules_for(field),
            &self.state.value(field),
            self.clock.today(),
        )
    }

    /// Validate a field and store the outcome as its displayed error
    pub fn check_field(&mut self, field: FieldName) -> ValidationResult {
        let result = self.validate_field(field);
        self.record(field, result);
        result
    }

    /// Validate every field in form order
    pub fn validate_all(&self) -> BTreeMap<FieldName, ValidationResult> {
        let today = self.clock.today();
        FieldName::ALL
            .into_iter()
            .map(|field| {
                let result = evaluate(rules_for(field), &self.state.value(field), today);
                (field, result)
            })
            .collect()
    }

    /// Whether a failure on this field prevents submission
    pub fn is_blocking(&self, field: FieldName) -> bool {
        match field {
            FieldName::Slider => self.options.slider_policy == SliderPolicy::Blocking,
            _ => !rules_for(field).is_empty(),
        }
    }

    /// Aggregate validity over the submit-blocking fields
    pub fn is_valid(&self) -> bool {
        self.validate_all()
            .into_iter()
            .all(|(field, result)| result.valid || !self.is_blocking(field))
    }

    /// Attempt a submission.
    ///
    /// Every invalid field is recorded for display, blocking or not. The form
    /// state itself is never modified.
    pub fn submit(&mut self) -> Result<FormState, ValidationFailure> {
        self.submit_count += 1;
        let results = self.validate_all();

        let mut blocking = Vec::new();
        for (field, result) in results {
            self.record(field, result);
            if !result.valid && self.is_blocking(field) {
                if let Some(error) = self.errors.get(&field) {
                    blocking.push(error.clone());
                }
            }
        }

        if blocking.is_empty() {
            tracing::debug!(attempt = self.submit_count, "form submitted");
            Ok(self.state.clone())
        } else {
            tracing::debug!(
                attempt = self.submit_count,
                invalid = blocking.len(),
                "form submission rejected"
            );
            Err(ValidationFailure { errors: blocking })
        }
    }

    /// Restore defaults and forget all errors and submit attempts
    pub fn reset(&mut self) {
        self.state = FormState::default();
        self.errors.clear();
        self.submit_count = 0;
        tracing::debug!("form reset");
    }

    /// Error currently displayed for a field
    pub fn error(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty_fields().is_empty()
    }

    pub fn dirty_fields(&self) -> Vec<FieldName> {
        self.state.dirty_fields()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let results = FieldName::ALL
            .into_iter()
            .map(|field| {
                let result = self
                    .error(field)
                    .map_or(ValidationResult::VALID, |e| ValidationResult::invalid(e.message));
                (field, result)
            })
            .collect();
        FormSnapshot {
            state: self.state.clone(),
            results,
            submit_count: self.submit_count(),
            dirty: self.is_dirty(),
        }
    }

    fn record(&mut self, field: FieldName, result: ValidationResult) {
        match result.message {
            Some(message) if !result.valid => {
                self.errors
                    .insert(field, ValidationError { field, message });
            }
            _ => {
                self.errors.remove(&field);
            }
        }
    }
}
