//! Diagnostic Sink Tests

use std::time::Duration;
use weave_domain::events::DiagnosticEvent;
use weave_domain::ports::DiagnosticSink;
use weave_domain::value_objects::Value;
use weave_providers::{MemoryDiagnosticSink, NullDiagnosticSink, TracingDiagnosticSink};

fn timed(ms: u64, succeeded: bool) -> DiagnosticEvent {
    DiagnosticEvent::ExecutionTimed {
        signature: "demo::Calc::run(i64)".into(),
        arguments: "1".into(),
        elapsed: Duration::from_millis(ms),
        succeeded,
    }
}

fn hit() -> DiagnosticEvent {
    DiagnosticEvent::CacheHit {
        signature: "demo::Calc::run(i64)".into(),
        key: 1,
        value: Value::I64(1),
    }
}

#[test]
fn test_memory_sink_records_in_order() {
    let sink = MemoryDiagnosticSink::new();
    sink.emit(timed(3, true));
    sink.emit(hit());
    sink.emit(timed(1, false));

    assert_eq!(sink.len(), 3);
    assert_eq!(sink.events_of_kind("cache_hit"), vec![hit()]);
    assert_eq!(
        sink.timings(),
        vec![Duration::from_millis(3), Duration::from_millis(1)]
    );

    sink.clear();
    assert!(sink.is_empty());
}

#[test]
fn test_null_and_tracing_sinks_accept_events() {
    let sinks: Vec<Box<dyn DiagnosticSink>> = vec![
        Box::new(NullDiagnosticSink::new()),
        Box::new(TracingDiagnosticSink::new()),
    ];
    for sink in &sinks {
        sink.emit(hit());
        sink.emit(timed(2, true));
        sink.emit(timed(2, false));
    }
}
