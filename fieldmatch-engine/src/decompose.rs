//! Splitting of pattern and value strings into a leading number and a suffix.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_AND_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]*(?:\.[0-9]+)?)(?s)(.*)$").unwrap());

/// A string split into its numeric prefix and the text that follows it.
///
/// `"10Gi"` becomes `("10", "Gi")`, `"*.txt"` becomes `("", "*.txt")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposed<'a> {
    pub number: &'a str,
    pub suffix: &'a str,
}

impl Decomposed<'_> {
    pub fn has_number(&self) -> bool {
        !self.number.is_empty()
    }
}

/// Decompose `input` into leading digits (with an optional `.digits`
/// fraction) and the verbatim remainder.
pub fn decompose(input: &str) -> Decomposed<'_> {
    // The expression matches every input: both groups accept the empty string.
    let number_len = NUMBER_AND_SUFFIX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map_or(0, |m| m.end());

    let (number, suffix) = input.split_at(number_len);
    Decomposed { number, suffix }
}
