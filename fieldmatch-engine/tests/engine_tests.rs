//! Integration tests for the fieldmatch pattern engine.

use std::collections::BTreeMap;
use std::sync::Once;

use fieldmatch_engine::{evaluate, validate, validate_value_with_pattern, MatchDiagnostic, Value};
use fieldmatch_policy::PatternPolicy;
use proptest::prelude::*;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn v(value: impl Into<Value>) -> Value {
    value.into()
}

// =========================================================================
// Scalar patterns
// =========================================================================

#[test]
fn test_bool_patterns() {
    init_tracing();

    assert!(validate(&v(true), &v(true)));
    assert!(!validate(&v(false), &v(true)));
    assert!(!validate(&v(1), &v(true)));
}

#[test]
fn test_nil_pattern_zero_values() {
    init_tracing();

    assert!(validate(&v(0), &Value::Null));
    assert!(validate(&v(0.0), &Value::Null));
    assert!(validate(&v(""), &Value::Null));
    assert!(validate(&v(false), &Value::Null));
    assert!(validate(&Value::Null, &Value::Null));
    assert!(!validate(&v(1), &Value::Null));
}

#[test]
fn test_entry_point_alias() {
    assert_eq!(
        validate_value_with_pattern(&v("foo.txt"), &v("*.txt")),
        validate(&v("foo.txt"), &v("*.txt"))
    );
}

#[test]
fn test_out_of_range_float_against_int() {
    init_tracing();

    assert!(!validate(&Value::Int64(i64::MAX), &Value::Float(1e19)));
    assert!(!validate(&Value::Float(1e19), &Value::Int64(i64::MAX)));
    assert!(!validate(&Value::Float(-1e19), &Value::Int64(i64::MIN)));
}

// =========================================================================
// String patterns
// =========================================================================

#[test]
fn test_wildcard_equality_and_negation() {
    init_tracing();

    assert!(validate(&v("foo.txt"), &v("*.txt")));
    assert!(!validate(&v("foo.txt"), &v("!*.txt")));
    assert!(validate(&v("v1"), &v("v?")));
}

#[test]
fn test_relational_operators_on_numbers() {
    init_tracing();

    assert!(validate(&v(5), &v(">=3")));
    assert!(!validate(&v(5), &v("<3")));
    assert!(validate(&v(10), &v(">=10")));
    assert!(!validate(&v(9), &v(">=10")));
}

#[test]
fn test_suffixed_quantities() {
    init_tracing();

    assert!(validate(&v("10Gi"), &v(">=5Gi")));
    assert!(!validate(&v("10Gi"), &v(">=5Mi")));
    assert_eq!(
        evaluate(&v("10Gi"), &v(">=5Mi")),
        Err(MatchDiagnostic::SuffixMismatch {
            value_suffix: "Gi".into(),
            pattern_suffix: "Mi".into(),
        })
    );
    assert_eq!(
        evaluate(&v(10), &v(">=5Gi")),
        Err(MatchDiagnostic::SuffixRequired("Gi".into()))
    );
}

#[test]
fn test_alternation() {
    init_tracing();

    assert!(validate(&v("b"), &v("a|b|c")));
    assert!(!validate(&v("d"), &v("a|b|c")));
    assert!(validate(&v("500m"), &v("<1 | <=500m")));
}

#[test]
fn test_alternation_diagnostics_survive_later_mismatch() {
    init_tracing();

    let err = evaluate(&v(1), &v("a|>=5")).unwrap_err();
    assert_eq!(err.causes().len(), 1);
    assert!(!validate(&v(1), &v("a|>=5")));

    let err = evaluate(&v(1), &v("a | >x | >=5")).unwrap_err();
    assert_eq!(err.causes().len(), 2);
    assert!(err.to_string().starts_with("no alternative matched: "));
}

// =========================================================================
// Unsupported patterns
// =========================================================================

#[test]
fn test_composite_patterns_rejected() {
    init_tracing();

    let map = Value::Map(BTreeMap::from([("k".to_string(), v("v"))]));
    let seq = Value::Sequence(vec![v(1), v(2)]);

    for value in [v(1), v("k"), Value::Null, map.clone(), seq.clone()] {
        assert!(!validate(&value, &map));
        assert!(!validate(&value, &seq));
    }
}

#[test]
fn test_relational_string_pattern_diagnostic() {
    assert_eq!(
        evaluate(&v("beta"), &v(">alpha")).unwrap_err().to_string(),
        "operator > is not applicable to strings"
    );
}

// =========================================================================
// Documents
// =========================================================================

#[test]
fn test_json_document_fields() {
    init_tracing();

    let doc: Value = serde_json::from_str(
        r#"{"replicas": 3, "memory": "2Gi", "image": "nginx:1.25", "debug": false}"#,
    )
    .expect("Failed to parse document");

    let field = |key: &str| doc.get(key).cloned().unwrap_or(Value::Null);

    assert!(validate(&field("replicas"), &v(3)));
    assert!(validate(&field("replicas"), &v(">2")));
    assert!(validate(&field("memory"), &v("<4Gi")));
    assert!(validate(&field("image"), &v("nginx:*")));
    assert!(validate(&field("debug"), &v(false)));
    assert!(validate(&field("missing"), &Value::Null));
}

#[test]
fn test_policy_over_engine() {
    init_tracing();

    let policy = PatternPolicy::from_toml(
        r#"
[[rules]]
name = "cpu"
pattern = "<=2 | <=2000m"

[[rules]]
name = "tier"
pattern = "frontend|backend"
        "#,
    )
    .expect("Failed to parse policy");

    let doc: Value =
        serde_json::from_str(r#"{"cpu": "1500m", "tier": "cache"}"#).expect("Failed to parse document");
    let outcomes = policy.evaluate_document(&doc);

    assert!(outcomes[0].decision.is_passed());
    assert!(!outcomes[1].decision.is_passed());
}

// =========================================================================
// Properties
// =========================================================================

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::Int),
        any::<i64>().prop_map(Value::Int64),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        "[a-z0-9.*?|<>=! ]{0,12}".prop_map(Value::String),
        Just(Value::Null),
    ]
}

proptest! {
    #[test]
    fn prop_bool_equality(value in any::<bool>(), pattern in any::<bool>()) {
        prop_assert_eq!(validate(&v(value), &v(pattern)), value == pattern);
    }

    #[test]
    fn prop_non_bool_against_bool_is_false(value in scalar(), pattern in any::<bool>()) {
        prop_assume!(!matches!(value, Value::Bool(_)));
        prop_assert!(!validate(&value, &v(pattern)));
    }

    #[test]
    fn prop_int_pattern_integral_float(x in -1_000_000i64..1_000_000, pattern in -1_000_000i64..1_000_000) {
        prop_assert_eq!(validate(&Value::Float(x as f64), &v(pattern)), x == pattern);
    }

    #[test]
    fn prop_int_pattern_fractional_float(x in -1_000_000i64..1_000_000, pattern in any::<i64>()) {
        prop_assert!(!validate(&Value::Float(x as f64 + 0.5), &v(pattern)));
    }

    #[test]
    fn prop_idempotent(value in scalar(), pattern in scalar()) {
        prop_assert_eq!(evaluate(&value, &pattern), evaluate(&value, &pattern));
    }

    #[test]
    fn prop_composite_pattern_never_matches(value in scalar(), items in prop::collection::vec(scalar(), 0..4)) {
        prop_assert!(!validate(&value, &Value::Sequence(items)));
    }

    #[test]
    fn prop_more_equal_not_truncated(value in -1000i64..1000, bound in -1000i64..1000) {
        prop_assume!(bound >= 0);
        prop_assert_eq!(validate(&v(value), &v(format!(">={bound}"))), value >= bound);
    }
}
