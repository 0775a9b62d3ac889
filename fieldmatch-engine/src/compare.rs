//! Scalar comparators, one per pattern kind.
//!
//! Each comparator returns `Ok(matched)` for a well-formed comparison and a
//! `MatchDiagnostic` when the value/pattern combination cannot be compared.

use crate::coerce::{exact_i64, is_integral, to_f64, Numeric};
use crate::decompose::decompose;
use crate::error::MatchDiagnostic;
use crate::matching::matches_pattern;
use crate::operator::Operator;
use crate::types::Value;

pub type MatchResult = Result<bool, MatchDiagnostic>;

fn type_mismatch(expected: &'static str, value: &Value) -> MatchDiagnostic {
    MatchDiagnostic::TypeMismatch {
        expected,
        found: value.kind().to_string(),
    }
}

pub fn compare_bool(value: &Value, pattern: bool) -> MatchResult {
    match value {
        Value::Bool(b) => Ok(*b == pattern),
        other => Err(type_mismatch("bool", other)),
    }
}

/// Integer pattern: integers compare exactly, floats only when integral.
///
/// An integral float outside the `i64` range equals no integer pattern.
pub fn compare_int(value: &Value, pattern: i64) -> MatchResult {
    match value {
        Value::Int(i) => Ok(i64::from(*i) == pattern),
        Value::Int64(i) => Ok(*i == pattern),
        Value::Float(x) if is_integral(*x) => Ok(exact_i64(*x) == Some(pattern)),
        Value::Float(x) => Err(MatchDiagnostic::FractionalMismatch {
            expected: "int",
            found: format!("float {x}"),
        }),
        other => Err(type_mismatch("int", other)),
    }
}

/// Float pattern: floats compare exactly; integers only against an integral
/// pattern.
///
/// `Int64` values are accepted like `Int`, since deserialized documents
/// carry every integer as `Int64`.
pub fn compare_float(value: &Value, pattern: f64) -> MatchResult {
    let int_value = match value {
        Value::Float(x) => return Ok(*x == pattern),
        Value::Int(i) => i64::from(*i),
        Value::Int64(i) => *i,
        other => return Err(type_mismatch("float64", other)),
    };

    if !is_integral(pattern) {
        return Err(MatchDiagnostic::FractionalMismatch {
            expected: "float64",
            found: format!("int {int_value} against pattern {pattern}"),
        });
    }
    Ok(exact_i64(pattern) == Some(int_value))
}

/// Nil pattern: true for the zero value of each scalar type.
pub fn compare_nil(value: &Value) -> MatchResult {
    match value {
        Value::Float(x) => Ok(*x == 0.0),
        Value::Int(i) => Ok(*i == 0),
        Value::Int64(i) => Ok(*i == 0),
        Value::String(s) => Ok(s.is_empty()),
        Value::Bool(b) => Ok(!*b),
        Value::Null => Ok(true),
        Value::Map(_) | Value::Sequence(_) => Err(MatchDiagnostic::CompositeValue),
        Value::Unsupported(kind) => Err(MatchDiagnostic::UnsupportedValue(kind.clone())),
    }
}

/// Compare two numeric operands with `operator`.
pub fn compare_numbers<'a>(
    value: impl Into<Numeric<'a>>,
    pattern: impl Into<Numeric<'a>>,
    operator: Operator,
) -> MatchResult {
    let pattern = to_f64(pattern.into())?;
    let value = to_f64(value.into())?;

    Ok(match operator {
        Operator::Equal => value == pattern,
        Operator::NotEqual => value != pattern,
        Operator::More => value > pattern,
        Operator::MoreEqual => value >= pattern,
        Operator::Less => value < pattern,
        Operator::LessEqual => value <= pattern,
    })
}

/// Pure string pattern: wildcard equality or inequality.
pub fn compare_string(value: &Value, pattern: &str, operator: Operator) -> MatchResult {
    if operator.is_relational() {
        return Err(MatchDiagnostic::OperatorNotApplicable(operator));
    }

    let Some(text) = value.as_str() else {
        return Err(type_mismatch("string", value));
    };

    let matched = matches_pattern(pattern, text);
    Ok(if operator == Operator::NotEqual {
        !matched
    } else {
        matched
    })
}

/// Numeric pattern with an optional unit suffix, such as `>=10Gi` or `<5`.
///
/// With a suffix the value must be a string carrying a matching suffix, and
/// the numeric parts are compared. Without one the value itself is compared
/// to the number, so plain integers and numeric strings both qualify.
pub fn compare_number_with_suffix(
    value: &Value,
    pattern_number: &str,
    pattern_suffix: &str,
    operator: Operator,
) -> MatchResult {
    if pattern_suffix.is_empty() {
        return compare_numbers(value, pattern_number, operator);
    }

    let Some(text) = value.as_str() else {
        return Err(MatchDiagnostic::SuffixRequired(pattern_suffix.to_string()));
    };

    let parts = decompose(text);
    if !matches_pattern(pattern_suffix, parts.suffix) {
        return Err(MatchDiagnostic::SuffixMismatch {
            value_suffix: parts.suffix.to_string(),
            pattern_suffix: pattern_suffix.to_string(),
        });
    }

    compare_numbers(parts.number, pattern_number, operator)
}
