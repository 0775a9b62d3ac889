//! Numeric coercion of values and numeric pattern text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MatchDiagnostic;
use crate::types::Value;

static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").unwrap());

/// An operand of a numeric comparison: either a document value or the
/// numeric text carved out of a pattern.
#[derive(Debug, Clone, Copy)]
pub enum Numeric<'a> {
    Value(&'a Value),
    Text(&'a str),
}

impl<'a> From<&'a Value> for Numeric<'a> {
    fn from(value: &'a Value) -> Self {
        Numeric::Value(value)
    }
}

impl<'a> From<&'a str> for Numeric<'a> {
    fn from(text: &'a str) -> Self {
        Numeric::Text(text)
    }
}

/// Coerce an operand to `f64`.
///
/// Integers and floats convert directly. Strings must be plain decimals:
/// an optional sign, digits, and an optional fraction. Exponents and the
/// `inf`/`nan` spellings are rejected.
pub fn to_f64(operand: Numeric<'_>) -> Result<f64, MatchDiagnostic> {
    match operand {
        Numeric::Text(text) => parse_decimal(text),
        Numeric::Value(Value::Int(i)) => Ok(f64::from(*i)),
        Numeric::Value(Value::Int64(i)) => Ok(*i as f64),
        Numeric::Value(Value::Float(x)) => Ok(*x),
        Numeric::Value(Value::String(s)) => parse_decimal(s),
        Numeric::Value(other) => Err(MatchDiagnostic::NotNumeric(other.kind().to_string())),
    }
}

fn parse_decimal(text: &str) -> Result<f64, MatchDiagnostic> {
    if !DECIMAL.is_match(text) {
        return Err(MatchDiagnostic::NotNumeric(format!("{text:?}")));
    }
    text.parse::<f64>()
        .map_err(|_| MatchDiagnostic::NotNumeric(format!("{text:?}")))
}

/// Whether a float has no fractional part.
pub fn is_integral(x: f64) -> bool {
    x.is_finite() && x.trunc() == x
}

/// The integer an integral float represents, if it fits in an `i64`.
///
/// The bounds are `-2^63 <= x < 2^63`; `i64::MAX as f64` rounds up to `2^63`
/// itself, which is out of range.
pub fn exact_i64(x: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if is_integral(x) && (-LIMIT..LIMIT).contains(&x) {
        Some(x as i64)
    } else {
        None
    }
}
