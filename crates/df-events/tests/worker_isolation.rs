//! Integration test: collector-per-worker event flow as the orchestrator
//! uses it, exercised through the public API only.

use df_events::{Event, EventCollector, Severity, ValidationIssue, register_validation_issues};

#[test]
fn orchestrator_merge_preserves_worker_order() {
    // Two workers fill their own collectors; the orchestrator merges the
    // flushed batches after joining, in worker order.
    let worker_a = std::thread::spawn(|| {
        let mut collector = EventCollector::new();
        for i in 0..10_000 {
            collector.register(Event::new(Severity::Warning, format!("a{i}")));
        }
        collector.flush()
    });
    let worker_b = std::thread::spawn(|| {
        let mut collector = EventCollector::new();
        for i in 0..20_000 {
            collector.register(Event::new(Severity::Warning, format!("b{i}")));
        }
        collector.flush()
    });

    let mut merged = Vec::new();
    merged.extend(worker_a.join().unwrap());
    merged.extend(worker_b.join().unwrap());

    assert_eq!(merged.len(), 30_000);
    assert!(merged[..10_000].iter().all(|e| e.message.starts_with('a')));
    assert!(merged[10_000..].iter().all(|e| e.message.starts_with('b')));
}

#[test]
fn validation_findings_flow_into_the_collector() {
    let mut collector = EventCollector::new();
    let issues = vec![
        None,
        Some(ValidationIssue::warning("wave height outside recommended range")),
        Some(ValidationIssue::error("failure number must be positive")),
    ];
    assert!(!register_validation_issues(&mut collector, &issues));
    assert!(collector.has_pending_error());

    let events = collector.flush();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].severity, Severity::Warning);
    assert_eq!(events[1].severity, Severity::Error);
    assert!(collector.flush().is_empty());
}
