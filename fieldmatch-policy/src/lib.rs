//! # fieldmatch policy
//!
//! Default rule-set backend for the fieldmatch pattern engine.
//!
//! Provides TOML-based configuration for defining named rules, each checking
//! one top-level document field against a pattern.

mod config;
mod policy;

pub use config::{PolicyConfig, PolicyConfigError, RuleConfig};
pub use policy::{PatternPolicy, PolicyError, RuleDecision, RuleOutcome};
