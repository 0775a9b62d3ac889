//! Rule-set policy backed by the pattern engine.

use std::collections::HashMap;

use fieldmatch_engine::{evaluate, Value};
use thiserror::Error;
use tracing::debug;

use crate::config::{PolicyConfig, PolicyConfigError, RuleConfig};

/// Errors from rule evaluation.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// No rule with this name is configured.
    #[error("rule '{0}' not found in policy")]
    UnknownRule(String),
}

/// Result of evaluating one rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleDecision {
    /// The value matched the rule's pattern.
    Passed,
    /// The value did not match, or could not be compared.
    Failed { reason: String },
    /// The document has no value for an optional rule.
    Skipped,
}

impl RuleDecision {
    pub fn is_passed(&self) -> bool {
        matches!(self, RuleDecision::Passed)
    }
}

/// A rule's decision for a whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub rule: String,
    pub decision: RuleDecision,
}

/// Pattern policy: an ordered list of named rules, each checking one
/// top-level document key against a pattern.
///
/// Nested documents are not traversed; callers flatten or select the
/// fields they want checked.
pub struct PatternPolicy {
    /// Rules in declaration order.
    rules: Vec<RuleEntry>,
    /// Rule name -> index into `rules`.
    by_name: HashMap<String, usize>,
}

struct RuleEntry {
    name: String,
    key: String,
    pattern: Value,
    required: bool,
    description: Option<String>,
}

impl PatternPolicy {
    /// Create a policy from a parsed configuration.
    ///
    /// When two rules share a name, lookups by name resolve to the later one.
    pub fn from_config(config: PolicyConfig) -> Self {
        let mut rules = Vec::with_capacity(config.rules.len());
        let mut by_name = HashMap::new();

        for rule in config.rules {
            let key = rule.key().to_string();
            let RuleConfig {
                name,
                pattern,
                required,
                description,
                ..
            } = rule;
            by_name.insert(name.clone(), rules.len());
            rules.push(RuleEntry {
                name,
                key,
                pattern,
                required,
                description,
            });
        }

        Self { rules, by_name }
    }

    /// Create a policy from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, PolicyConfigError> {
        let config = PolicyConfig::parse(content)?;
        Ok(Self::from_config(config))
    }

    /// Create a policy from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, PolicyConfigError> {
        let config = PolicyConfig::from_file(path)?;
        Ok(Self::from_config(config))
    }

    /// Create an empty policy (useful for testing).
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Names of the configured rules, in declaration order.
    pub fn rules(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    /// Check a single value against the named rule.
    pub fn evaluate(&self, name: &str, value: &Value) -> Result<RuleDecision, PolicyError> {
        let Some(&index) = self.by_name.get(name) else {
            return Err(PolicyError::UnknownRule(name.to_string()));
        };
        Ok(check_rule(&self.rules[index], value))
    }

    /// Check every rule against the matching top-level key of a document.
    pub fn evaluate_document(&self, document: &Value) -> Vec<RuleOutcome> {
        self.rules
            .iter()
            .map(|rule| {
                let decision = match document {
                    Value::Map(fields) => match fields.get(&rule.key) {
                        Some(value) => check_rule(rule, value),
                        None if rule.required => RuleDecision::Failed {
                            reason: format!("required key '{}' is missing", rule.key),
                        },
                        None => RuleDecision::Skipped,
                    },
                    _ => RuleDecision::Failed {
                        reason: "document is not a map".to_string(),
                    },
                };

                debug!(rule = %rule.name, ?decision, "rule evaluated");
                RuleOutcome {
                    rule: rule.name.clone(),
                    decision,
                }
            })
            .collect()
    }
}

/// Failure reasons are prefixed with the rule's description, when it has one.
fn check_rule(rule: &RuleEntry, value: &Value) -> RuleDecision {
    let reason = match evaluate(value, &rule.pattern) {
        Ok(true) => return RuleDecision::Passed,
        Ok(false) => format!("value '{value}' does not match pattern '{}'", rule.pattern),
        Err(diagnostic) => diagnostic.to_string(),
    };

    let reason = match &rule.description {
        Some(description) => format!("{description}: {reason}"),
        None => reason,
    };
    RuleDecision::Failed { reason }
}
