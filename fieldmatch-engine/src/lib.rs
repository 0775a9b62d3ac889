//! # fieldmatch engine
//!
//! Value-against-pattern matching for a declarative policy engine.
//!
//! This crate provides:
//! - A closed `Value` model for document values and patterns
//! - Operator parsing (`>=`, `<=`, `>`, `<`, `!`) and numeric/suffix decomposition
//! - Scalar comparators for booleans, numbers, wildcard strings and nil
//! - `validate`, the boolean entry point, and `evaluate`, which also explains
//!   why an unsupported combination could not be compared

pub mod coerce;
pub mod compare;
pub mod decompose;
pub mod engine;
pub mod error;
pub mod matching;
pub mod operator;
pub mod types;

pub use engine::{evaluate, validate, ALTERNATION_SEPARATOR};
pub use error::MatchDiagnostic;
pub use operator::Operator;
pub use types::Value;

/// Check a value against a pattern. Alias of [`validate`].
pub fn validate_value_with_pattern(value: &Value, pattern: &Value) -> bool {
    validate(value, pattern)
}
