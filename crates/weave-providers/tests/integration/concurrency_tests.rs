//! Concurrent dispatch through a shared caching proxy

use crate::test_utils::SlowTenfold;
use std::sync::Arc;
use std::thread;
use weave_application::create_proxy;
use weave_domain::ports::Advice;
use weave_domain::value_objects::Value;
use weave_providers::{CachingAdvice, NullDiagnosticSink, ResultCache, TimingAdvice};

const THREADS: i64 = 8;
const KEYS_PER_THREAD: i64 = 200;

#[test]
fn test_distinct_keys_do_not_interfere() {
    let cache = Arc::new(ResultCache::new());
    let sink = Arc::new(NullDiagnosticSink::new());
    let advices: Vec<Arc<dyn Advice>> = vec![
        Arc::new(TimingAdvice::new(sink.clone())),
        Arc::new(CachingAdvice::new(Arc::clone(&cache), sink)),
    ];
    let target = Arc::new(SlowTenfold::default());
    let proxy = Arc::new(create_proxy(Arc::clone(&target), &advices).unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let proxy = Arc::clone(&proxy);
            thread::spawn(move || {
                let base = thread_id * KEYS_PER_THREAD;
                // Two passes: the first fills the cache, the second reads it back.
                for _ in 0..2 {
                    for key in base..base + KEYS_PER_THREAD {
                        let value = proxy.invoke("tenfold", &[Value::I64(key)]).unwrap();
                        assert_eq!(value, Value::I64(key * 10));
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let total = (THREADS * KEYS_PER_THREAD) as usize;
    assert_eq!(cache.len(), total);
    assert_eq!(target.calls(), total);
    for key in 0..THREADS * KEYS_PER_THREAD {
        assert_eq!(cache.peek(key), Some(Value::I64(key * 10)));
    }

    let stats = cache.stats();
    assert_eq!(stats.hits, total as u64);
    assert_eq!(stats.misses, total as u64);
}

#[test]
fn test_same_key_races_keep_one_entry() {
    let cache = Arc::new(ResultCache::new());
    let advices: Vec<Arc<dyn Advice>> = vec![Arc::new(CachingAdvice::new(
        Arc::clone(&cache),
        Arc::new(NullDiagnosticSink::new()),
    ))];
    let target = Arc::new(SlowTenfold::default());
    let proxy = Arc::new(create_proxy(Arc::clone(&target), &advices).unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let proxy = Arc::clone(&proxy);
            thread::spawn(move || proxy.invoke("tenfold", &[Value::I64(9)]).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Value::I64(90));
    }

    assert_eq!(cache.len(), 1);
    // No single-flight: racing misses may each reach the target.
    assert!((1..=THREADS as usize).contains(&target.calls()));
}
