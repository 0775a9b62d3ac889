//! TOML configuration parsing for pattern rule sets.

use fieldmatch_engine::Value;
use serde::Deserialize;
use thiserror::Error;

/// Errors from policy configuration parsing.
#[derive(Error, Debug)]
pub enum PolicyConfigError {
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse policy TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// A single named check of one document field against a pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    /// Unique rule name (e.g., "min-replicas").
    pub name: String,

    /// Top-level document key the rule reads. Defaults to the rule name.
    #[serde(default)]
    pub key: Option<String>,

    /// The pattern: a string expression (`">=2 | 0"`, `"*.txt"`, `"<=4Gi"`),
    /// or a literal integer, float or boolean.
    pub pattern: Value,

    /// Whether a missing key fails the rule instead of skipping it.
    #[serde(default)]
    pub required: bool,

    /// Free-form text for reports.
    #[serde(default)]
    pub description: Option<String>,
}

impl RuleConfig {
    /// The document key this rule reads.
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.name)
    }
}

impl PolicyConfig {
    /// Load policy from a TOML file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, PolicyConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse policy from a TOML string.
    pub fn parse(content: &str) -> Result<Self, PolicyConfigError> {
        let config: PolicyConfig = toml::from_str(content)?;
        Ok(config)
    }
}
