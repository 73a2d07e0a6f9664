//! Configuration Type Tests

use weave_domain::constants::{CACHING_DEFAULT_PRIORITY, TIMING_DEFAULT_PRIORITY};
use weave_domain::value_objects::{ModulePattern, ParamType, ParamsPattern, Visibility};
use weave_infrastructure::config::{AppConfig, AspectsConfig};

#[test]
fn test_default_aspects() {
    let aspects = AspectsConfig::default();

    assert!(aspects.timing.enabled);
    assert_eq!(aspects.timing.priority, TIMING_DEFAULT_PRIORITY);
    assert_eq!(aspects.timing.pointcuts.len(), 1);
    assert_eq!(aspects.timing.pointcuts[0].visibility, Some(Visibility::Public));

    assert!(aspects.caching.enabled);
    assert_eq!(aspects.caching.priority, CACHING_DEFAULT_PRIORITY);
    assert_eq!(
        aspects.caching.pointcuts[0].params,
        ParamsPattern::Exact(vec![ParamType::I64])
    );
    assert!(aspects.timing.priority < aspects.caching.priority);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config: AppConfig = toml::from_str(
        r#"
        [aspects.caching]
        enabled = false
        "#,
    )
    .unwrap();

    assert!(!config.aspects.caching.enabled);
    assert_eq!(config.aspects.caching.priority, CACHING_DEFAULT_PRIORITY);
    assert_eq!(config.aspects.timing, AspectsConfig::default().timing);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_pointcut_rules_from_toml() {
    let config: AppConfig = toml::from_str(
        r#"
        [[aspects.caching.pointcuts]]
        visibility = "public"
        module = { prefix = "calc" }
        params = { exact = ["i64"] }
        "#,
    )
    .unwrap();

    let rules = &config.aspects.caching.pointcuts;
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].module, ModulePattern::Prefix("calc".to_string()));
    assert_eq!(rules[0].to_string(), "execution(public calc..*.*(i64))");
}
