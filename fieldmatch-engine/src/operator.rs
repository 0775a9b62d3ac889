//! Relational operators that may prefix a string pattern.

use std::fmt;

/// Comparison operator parsed from the leading characters of a pattern.
///
/// `Equal` has an empty encoding and is the default when no other prefix is
/// present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    More,
    MoreEqual,
    Less,
    LessEqual,
}

/// Prefixes in the order they must be tried: two-character operators first.
const PREFIXES: [(&str, Operator); 5] = [
    (">=", Operator::MoreEqual),
    ("<=", Operator::LessEqual),
    (">", Operator::More),
    ("<", Operator::Less),
    ("!", Operator::NotEqual),
];

impl Operator {
    /// The string encoding of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "",
            Operator::NotEqual => "!",
            Operator::More => ">",
            Operator::MoreEqual => ">=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
        }
    }

    /// Whether the operator orders its operands rather than testing equality.
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            Operator::More | Operator::MoreEqual | Operator::Less | Operator::LessEqual
        )
    }

    /// Split a pattern into its operator and the remaining text.
    ///
    /// Patterns shorter than two bytes never carry an operator, so `">"` and
    /// `"!"` on their own are literal `Equal` patterns.
    pub fn parse(pattern: &str) -> (Operator, &str) {
        if pattern.len() < 2 {
            return (Operator::Equal, pattern);
        }

        for (prefix, operator) in PREFIXES {
            if let Some(rest) = pattern.strip_prefix(prefix) {
                return (operator, rest);
            }
        }

        (Operator::Equal, pattern)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Equal => write!(f, "=="),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
