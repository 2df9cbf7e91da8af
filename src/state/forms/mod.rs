//! Form domain layer
//!
//! Field values, declarative rules and the engine that validates them.
//! Nothing in here knows about rendering.

mod clock;
mod engine;
mod error;
mod field;
mod form_state;
mod rules;

pub use engine::{
    EngineOptions, FormSnapshot, FormValidationEngine, SliderPolicy, ValidationMode,
};
pub use field::{DropdownChoice, FieldName, FieldValue, RadioChoice, DATE_FORMAT};
pub use form_state::{FormState, SLIDER_MAX, SLIDER_MIN};
