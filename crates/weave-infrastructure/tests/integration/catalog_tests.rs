//! Aspect Catalog Tests

use crate::test_utils::Doubler;
use std::sync::Arc;
use weave_domain::error::{Error, Result};
use weave_domain::ports::{Advice, Next};
use weave_domain::value_objects::{InvocationContext, PointcutRule, Value};
use weave_infrastructure::AspectCatalog;
use weave_infrastructure::config::AspectsConfig;
use weave_providers::MemoryDiagnosticSink;

struct Negate {
    pointcuts: Vec<PointcutRule>,
}

impl Advice for Negate {
    fn name(&self) -> &str {
        "negate"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn pointcuts(&self) -> &[PointcutRule] {
        &self.pointcuts
    }

    fn invoke(&self, _ctx: &InvocationContext<'_>, next: Next<'_>) -> Result<Value> {
        match next.proceed()? {
            Value::I64(n) => Ok(Value::I64(-n)),
            other => Ok(other),
        }
    }
}

fn catalog(config: &AspectsConfig) -> (AspectCatalog, Arc<MemoryDiagnosticSink>) {
    let sink = Arc::new(MemoryDiagnosticSink::new());
    let catalog = AspectCatalog::from_config(config, sink.clone()).unwrap();
    (catalog, sink)
}

#[test]
fn test_default_catalog_wires_both_aspects() {
    let (catalog, _) = catalog(&AspectsConfig::default());
    let names: Vec<_> = catalog.advices().iter().map(|a| a.name()).collect();
    assert_eq!(names, vec!["timing", "caching"]);

    let proxy = catalog.proxy(Arc::new(Doubler::default())).unwrap();
    assert_eq!(
        proxy.chain("double").unwrap().advice_names(),
        vec!["timing", "caching"]
    );
    assert_eq!(proxy.chain("shout").unwrap().advice_names(), vec!["timing"]);
    assert!(proxy.chain("halve").unwrap().is_empty());
}

#[test]
fn test_cached_results_are_shared_through_the_catalog() {
    let (catalog, sink) = catalog(&AspectsConfig::default());
    let target = Arc::new(Doubler::default());
    let proxy = catalog.proxy(Arc::clone(&target)).unwrap();

    assert_eq!(proxy.invoke("double", &[Value::I64(21)]).unwrap(), Value::I64(42));
    assert_eq!(proxy.invoke("double", &[Value::I64(21)]).unwrap(), Value::I64(42));

    assert_eq!(target.calls(), 1);
    assert_eq!(catalog.result_cache().peek(21), Some(Value::I64(42)));
    let stats = catalog.cache_stats();
    assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));
    assert_eq!(sink.events_of_kind("execution_timed").len(), 2);
}

#[test]
fn test_disabled_caching_is_not_registered() {
    let mut config = AspectsConfig::default();
    config.caching.enabled = false;
    let (catalog, _) = catalog(&config);
    let target = Arc::new(Doubler::default());
    let proxy = catalog.proxy(Arc::clone(&target)).unwrap();

    proxy.invoke("double", &[Value::I64(1)]).unwrap();
    proxy.invoke("double", &[Value::I64(1)]).unwrap();

    assert_eq!(proxy.chain("double").unwrap().advice_names(), vec!["timing"]);
    assert_eq!(target.calls(), 2);
    assert!(catalog.result_cache().is_empty());
}

#[test]
fn test_configured_priorities_reorder_chain() {
    let mut config = AspectsConfig::default();
    config.caching.priority = 0;
    let (catalog, _) = catalog(&config);
    let proxy = catalog.proxy(Arc::new(Doubler::default())).unwrap();

    assert_eq!(
        proxy.chain("double").unwrap().advice_names(),
        vec!["caching", "timing"]
    );
}

#[test]
fn test_registered_advice_joins_the_chain() {
    let (mut catalog, _) = catalog(&AspectsConfig::default());
    catalog.register(Arc::new(Negate {
        pointcuts: vec![PointcutRule::default().method_named("double")],
    }));
    let proxy = catalog.proxy(Arc::new(Doubler::default())).unwrap();

    assert_eq!(
        proxy.chain("double").unwrap().advice_names(),
        vec!["timing", "caching", "negate"]
    );
    // Innermost negation runs before caching stores the value.
    assert_eq!(proxy.invoke("double", &[Value::I64(4)]).unwrap(), Value::I64(-8));
    assert_eq!(catalog.result_cache().peek(4), Some(Value::I64(-8)));
}

#[test]
fn test_invalid_rule_rejected_at_construction() {
    let mut config = AspectsConfig::default();
    config.timing.pointcuts = vec![PointcutRule::default().method_like("")];

    let err = AspectCatalog::from_config(&config, Arc::new(MemoryDiagnosticSink::new()))
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_with_tracing_builds_catalog() {
    let catalog = AspectCatalog::with_tracing(&AspectsConfig::default()).unwrap();
    let proxy = catalog.proxy(Arc::new(Doubler::default())).unwrap();
    assert_eq!(
        proxy.invoke("shout", &[Value::Str("hi".into())]).unwrap(),
        Value::Str("HI".into())
    );
}
