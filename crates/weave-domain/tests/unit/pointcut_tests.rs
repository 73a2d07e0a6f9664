//! Pointcut Rule Tests

use weave_domain::value_objects::{
    ModulePattern, NamePattern, ParamType, ParamsPattern, PointcutRule, Visibility,
};

#[test]
fn test_default_rule_matches_anything_declaratively() {
    let rule = PointcutRule::default();
    assert_eq!(rule.visibility, None);
    assert_eq!(rule.module, ModulePattern::Any);
    assert_eq!(rule.method, NamePattern::Any);
    assert_eq!(rule.params, ParamsPattern::Any);
    assert_eq!(rule.to_string(), "execution(*.*(..))");
}

#[test]
fn test_rule_builder() {
    let rule = PointcutRule::default()
        .with_visibility(Visibility::Crate)
        .in_module("calc")
        .on_type("RecCalculator")
        .method_like("fact*")
        .with_params(vec![ParamType::I64, ParamType::Str]);

    assert_eq!(rule.to_string(), "execution(crate calc.RecCalculator.fact*(i64, str))");
}

#[test]
fn test_rule_from_json() {
    let json = r#"{
        "visibility": "public",
        "module": { "prefix": "calc" },
        "method": { "exact": "factorial" },
        "params": { "exact": ["i64"] }
    }"#;

    let rule: PointcutRule = serde_json::from_str(json).expect("rule should parse");

    assert_eq!(
        rule,
        PointcutRule::default()
            .public()
            .in_module_tree("calc")
            .method_named("factorial")
            .with_params(vec![ParamType::I64])
    );
}

#[test]
fn test_rule_omitted_fields_default_to_any() {
    let rule: PointcutRule = serde_json::from_str("{}").expect("empty rule should parse");
    assert_eq!(rule, PointcutRule::default());
}
