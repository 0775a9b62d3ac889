//! Diagnostics for value/pattern combinations the engine cannot match.

use crate::operator::Operator;
use thiserror::Error;

/// Why a value could not be matched against a pattern.
///
/// A plain mismatch is not a diagnostic; these describe malformed or
/// unsupported combinations. At the public boundary every diagnostic is
/// logged and treated as "does not match".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchDiagnostic {
    /// The value's type cannot be compared with the pattern's type.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// An integer and a float were compared but the float has a fraction.
    #[error("expected {expected}, found {found} with a fractional part")]
    FractionalMismatch {
        expected: &'static str,
        found: String,
    },

    /// Maps and sequences are never patterns.
    #[error("maps and arrays as patterns are not supported")]
    CompositePattern,

    /// Maps and sequences have no zero value to test against a nil pattern.
    #[error("maps and arrays could not be checked with nil pattern")]
    CompositeValue,

    /// The pattern is a scalar of a type the engine has no rules for.
    #[error("unknown type as pattern: {0}")]
    UnsupportedPattern(String),

    /// The value is a scalar of a type the nil pattern has no rules for.
    #[error("unknown type as value when checking for nil pattern: {0}")]
    UnsupportedValue(String),

    /// A relational operator was applied to a pure string pattern.
    #[error("operator {0} is not applicable to strings")]
    OperatorNotApplicable(Operator),

    /// A suffixed numeric pattern met a value that is not a string.
    #[error("number must have suffix: {0}")]
    SuffixRequired(String),

    /// The value's unit suffix does not match the pattern's suffix.
    #[error("suffix {value_suffix:?} has not passed wildcard check: {pattern_suffix:?}")]
    SuffixMismatch {
        value_suffix: String,
        pattern_suffix: String,
    },

    /// An operand of a numeric comparison is not a number.
    #[error("could not convert {0} to float64")]
    NotNumeric(String),

    /// Several alternatives of a `|` pattern could not be compared and none
    /// of the others matched.
    #[error("no alternative matched: {}", join(.0))]
    Alternatives(Vec<MatchDiagnostic>),
}

impl MatchDiagnostic {
    /// The individual diagnostics this one stands for, one per failing
    /// alternative.
    pub fn causes(&self) -> &[MatchDiagnostic] {
        match self {
            MatchDiagnostic::Alternatives(causes) => causes,
            single => std::slice::from_ref(single),
        }
    }
}

fn join(diagnostics: &[MatchDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
