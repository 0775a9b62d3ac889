//! The pattern dispatcher: routes a value/pattern pair to its comparator.

use tracing::warn;

use crate::compare::{
    compare_bool, compare_float, compare_int, compare_nil, compare_number_with_suffix,
    compare_string, MatchResult,
};
use crate::decompose::decompose;
use crate::error::MatchDiagnostic;
use crate::operator::Operator;
use crate::types::Value;

/// Alternatives inside a string pattern are separated by this character.
pub const ALTERNATION_SEPARATOR: char = '|';

/// Check a value against a pattern.
///
/// Every malformed or unsupported combination is logged at `WARN` and
/// reported as a non-match; this function never panics.
pub fn validate(value: &Value, pattern: &Value) -> bool {
    match evaluate(value, pattern) {
        Ok(matched) => matched,
        Err(diagnostic) => {
            for cause in diagnostic.causes() {
                warn!(
                    pattern_kind = pattern.kind(),
                    value_kind = value.kind(),
                    "{cause}"
                );
            }
            false
        }
    }
}

/// Check a value against a pattern, reporting why an unsupported
/// combination could not be compared.
///
/// `Ok(false)` is an ordinary mismatch.
pub fn evaluate(value: &Value, pattern: &Value) -> MatchResult {
    match pattern {
        Value::Bool(b) => compare_bool(value, *b),
        Value::Int(i) => compare_int(value, i64::from(*i)),
        Value::Int64(i) => compare_int(value, *i),
        Value::Float(x) => compare_float(value, *x),
        Value::String(s) => evaluate_string_pattern(value, s),
        Value::Null => compare_nil(value),
        Value::Map(_) | Value::Sequence(_) => Err(MatchDiagnostic::CompositePattern),
        Value::Unsupported(kind) => Err(MatchDiagnostic::UnsupportedPattern(kind.clone())),
    }
}

/// Evaluate a `|`-separated list of alternatives; any match wins.
///
/// When no alternative matches, every alternative that could not be compared
/// is reported.
fn evaluate_string_pattern(value: &Value, pattern: &str) -> MatchResult {
    let mut diagnostics = Vec::new();

    for alternative in pattern.split(ALTERNATION_SEPARATOR) {
        match evaluate_alternative(value, alternative.trim()) {
            Ok(true) => return Ok(true),
            Ok(false) => {}
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
    }

    match diagnostics.len() {
        0 => Ok(false),
        1 => Err(diagnostics.remove(0)),
        _ => Err(MatchDiagnostic::Alternatives(diagnostics)),
    }
}

fn evaluate_alternative(value: &Value, alternative: &str) -> MatchResult {
    let (operator, rest) = Operator::parse(alternative);
    let parts = decompose(rest);

    if parts.has_number() {
        compare_number_with_suffix(value, parts.number, parts.suffix, operator)
    } else {
        compare_string(value, parts.suffix, operator)
    }
}
