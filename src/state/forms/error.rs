//! Validation error types

use super::field::FieldName;
use thiserror::Error;

/// A single field that failed one of its rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: FieldName,
    pub message: &'static str,
}

/// Returned by a submit attempt that has blocking errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationFailure {
    /// Errors in form order
    pub errors: Vec<ValidationError>,
}
