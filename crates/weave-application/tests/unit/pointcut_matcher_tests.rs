//! Pointcut Matcher Tests

use weave_application::PointcutMatcher;
use weave_domain::error::Error;
use weave_domain::value_objects::{ParamType, PointcutRule, TargetDescriptor, Visibility};

fn factorial() -> TargetDescriptor {
    TargetDescriptor::new("calc::recursive", "RecCalculator", "factorial")
        .with_params(vec![ParamType::I64])
}

#[test]
fn test_default_rule_matches_resolved_descriptor() {
    assert!(PointcutMatcher::matches(&PointcutRule::default(), &factorial()));
}

#[test]
fn test_module_tree_rule() {
    let rule = PointcutRule::default().public().in_module_tree("calc");
    assert!(PointcutMatcher::matches(&rule, &factorial()));

    let elsewhere = TargetDescriptor::new("billing", "Invoice", "total");
    assert!(!PointcutMatcher::matches(&rule, &elsewhere));
}

#[test]
fn test_exact_module_rule_excludes_children() {
    let rule = PointcutRule::default().in_module("calc");
    assert!(!PointcutMatcher::matches(&rule, &factorial()));
    assert!(PointcutMatcher::matches(
        &PointcutRule::default().in_module("calc::recursive"),
        &factorial()
    ));
}

#[test]
fn test_visibility_rule() {
    let rule = PointcutRule::default().public();
    let private = factorial().with_visibility(Visibility::Private);
    assert!(!PointcutMatcher::matches(&rule, &private));
    assert!(PointcutMatcher::matches(
        &PointcutRule::default().with_visibility(Visibility::Private),
        &private
    ));
}

#[test]
fn test_method_name_rules() {
    assert!(PointcutMatcher::matches(
        &PointcutRule::default().method_named("factorial"),
        &factorial()
    ));
    assert!(!PointcutMatcher::matches(
        &PointcutRule::default().method_named("fact"),
        &factorial()
    ));
    assert!(PointcutMatcher::matches(
        &PointcutRule::default().method_like("fact*"),
        &factorial()
    ));
    assert!(!PointcutMatcher::matches(
        &PointcutRule::default().method_like("*sum"),
        &factorial()
    ));
}

#[test]
fn test_type_name_rule() {
    assert!(PointcutMatcher::matches(
        &PointcutRule::default().on_type("RecCalculator"),
        &factorial()
    ));
    assert!(!PointcutMatcher::matches(
        &PointcutRule::default().on_type("ImpeCalculator"),
        &factorial()
    ));
}

#[test]
fn test_parameter_list_must_match_fully() {
    let single_i64 = PointcutRule::default().with_params(vec![ParamType::I64]);
    assert!(PointcutMatcher::matches(&single_i64, &factorial()));

    let two_params = factorial().with_params(vec![ParamType::I64, ParamType::I64]);
    assert!(!PointcutMatcher::matches(&single_i64, &two_params));

    let unsigned = factorial().with_params(vec![ParamType::U64]);
    assert!(!PointcutMatcher::matches(&single_i64, &unsigned));

    let none = factorial().with_params(vec![]);
    assert!(!PointcutMatcher::matches(&single_i64, &none));
}

#[test]
fn test_unresolved_descriptor_never_matches() {
    let unresolved = factorial().with_params(vec![ParamType::Unresolved("BigInt".into())]);
    assert!(!PointcutMatcher::matches(&PointcutRule::default(), &unresolved));

    let anonymous = TargetDescriptor::new("", "Closure", "call");
    assert!(!PointcutMatcher::matches(&PointcutRule::default(), &anonymous));
}

#[test]
fn test_check_explains_mismatch() {
    let rule = PointcutRule::default().method_named("sqrt");
    match PointcutMatcher::check(&rule, &factorial()) {
        Err(Error::PointcutMismatch { descriptor, reason }) => {
            assert_eq!(descriptor, "calc::recursive::RecCalculator::factorial(i64)");
            assert!(reason.contains("factorial"));
        }
        other => panic!("Expected PointcutMismatch, got {:?}", other),
    }
}

#[test]
fn test_matches_any() {
    let rules = vec![
        PointcutRule::default().method_named("sqrt"),
        PointcutRule::default().method_named("factorial"),
    ];
    assert!(PointcutMatcher::matches_any(&rules, &factorial()));
    assert!(!PointcutMatcher::matches_any(&[], &factorial()));
}

#[test]
fn test_validate_rule() {
    assert!(PointcutMatcher::validate_rule(&PointcutRule::default()).is_ok());
    assert!(PointcutMatcher::validate_rule(&PointcutRule::default().method_like("get*")).is_ok());
    assert!(PointcutMatcher::validate_rule(&PointcutRule::default().in_module_tree("")).is_err());
    assert!(PointcutMatcher::validate_rule(&PointcutRule::default().method_named("")).is_err());
}
