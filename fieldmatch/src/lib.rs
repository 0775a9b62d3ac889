//! # fieldmatch
//!
//! Convenience crate that re-exports the fieldmatch pattern engine with the
//! default TOML rule-set backend.
//!
//! For the matcher alone, depend on `fieldmatch-engine` directly.
//!
//! # Quick Start
//!
//! ```rust
//! use fieldmatch::{validate_value_with_pattern, PatternPolicy, Value};
//!
//! // Single comparisons
//! assert!(validate_value_with_pattern(&Value::from("10Gi"), &Value::from(">=5Gi")));
//! assert!(validate_value_with_pattern(&Value::from("b"), &Value::from("a|b|c")));
//! assert!(!validate_value_with_pattern(&Value::from(5), &Value::from("<3")));
//!
//! // Rule sets loaded from TOML
//! let policy = PatternPolicy::from_toml(r#"
//!     [[rules]]
//!     name = "replicas"
//!     pattern = ">=2 | 0"
//! "#).expect("Failed to parse policy");
//!
//! let decision = policy
//!     .evaluate("replicas", &Value::from(3))
//!     .expect("Rule exists");
//! assert!(decision.is_passed());
//! ```

// Re-export everything from the engine crate
pub use fieldmatch_engine::*;

// Re-export the default policy backend
pub use fieldmatch_policy::{
    PatternPolicy, PolicyConfig, PolicyConfigError, PolicyError, RuleConfig, RuleDecision,
    RuleOutcome,
};
