//! Aspect catalog
//!
//! Holds the advices built from configuration, in registration order,
//! plus the result cache the caching advice writes to.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let catalog = AspectCatalog::with_tracing(&config.aspects)?;
//! let proxy = catalog.proxy(Arc::new(RecCalculator::new()))?;
//! ```

use crate::config::AspectsConfig;
use std::fmt;
use std::sync::Arc;
use tracing::info;
use weave_application::{PointcutMatcher, Proxy, create_proxy};
use weave_domain::error::Result;
use weave_domain::ports::{Advice, DiagnosticSink, Invocable};
use weave_domain::value_objects::CacheStats;
use weave_providers::{CachingAdvice, ResultCache, TimingAdvice, TracingDiagnosticSink};

/// Advice set and shared stores for one application
pub struct AspectCatalog {
    advices: Vec<Arc<dyn Advice>>,
    cache: Arc<ResultCache>,
    sink: Arc<dyn DiagnosticSink>,
}

impl AspectCatalog {
    /// Build the enabled built-in advices, reporting to `sink`
    ///
    /// Timing is registered before caching; within equal priorities that
    /// registration order decides nesting.
    pub fn from_config(config: &AspectsConfig, sink: Arc<dyn DiagnosticSink>) -> Result<Self> {
        let cache = Arc::new(ResultCache::new());
        let mut advices: Vec<Arc<dyn Advice>> = Vec::new();

        if config.timing.enabled {
            config
                .timing
                .pointcuts
                .iter()
                .try_for_each(PointcutMatcher::validate_rule)?;
            advices.push(Arc::new(
                TimingAdvice::new(Arc::clone(&sink))
                    .with_priority(config.timing.priority)
                    .with_pointcuts(config.timing.pointcuts.clone()),
            ));
        }

        if config.caching.enabled {
            config
                .caching
                .pointcuts
                .iter()
                .try_for_each(PointcutMatcher::validate_rule)?;
            advices.push(Arc::new(
                CachingAdvice::new(Arc::clone(&cache), Arc::clone(&sink))
                    .with_priority(config.caching.priority)
                    .with_pointcuts(config.caching.pointcuts.clone()),
            ));
        }

        info!(
            advices = ?advices.iter().map(|a| a.name()).collect::<Vec<_>>(),
            "Aspect catalog built"
        );

        Ok(Self {
            advices,
            cache,
            sink,
        })
    }

    /// Build the catalog with diagnostics routed to `tracing`
    pub fn with_tracing(config: &AspectsConfig) -> Result<Self> {
        Self::from_config(config, Arc::new(TracingDiagnosticSink::new()))
    }

    /// Register an additional advice after the built-in ones
    pub fn register(&mut self, advice: Arc<dyn Advice>) {
        self.advices.push(advice);
    }

    /// Wrap `target` in a proxy carrying every registered advice
    pub fn proxy<T: Invocable + ?Sized>(&self, target: Arc<T>) -> Result<Proxy<T>> {
        create_proxy(target, &self.advices)
    }

    /// Registered advices, in registration order
    pub fn advices(&self) -> &[Arc<dyn Advice>] {
        &self.advices
    }

    /// Store shared by the caching advice
    pub fn result_cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }

    /// Current result cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Sink the built-in advices report to
    pub fn diagnostic_sink(&self) -> &Arc<dyn DiagnosticSink> {
        &self.sink
    }
}

impl fmt::Debug for AspectCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AspectCatalog")
            .field(
                "advices",
                &self.advices.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .field("cache", &self.cache)
            .finish()
    }
}
