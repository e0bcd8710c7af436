//! Tests for the event system.

use super::*;

#[test]
fn test_event_support_new() {
    let support = ProgressEventSupport::new();
    assert_eq!(support.listener_count(), 0);
    assert!(!support.has_listeners());
}

#[test]
fn test_event_support_fire_events() {
    let mut support = ProgressEventSupport::new();
    let listener = Arc::new(CountingProgressListener::new());
    support.add_listener(listener.clone());

    support.on_search_started(4);
    support.on_poll(Duration::from_millis(1));
    support.on_poll(Duration::from_millis(2));
    support.on_solution_found(1, 3, Duration::from_millis(3));
    support.on_search_ended(SolveStatus::Optimal, Duration::from_millis(4));

    assert_eq!(listener.started_count(), 1);
    assert_eq!(listener.poll_count(), 2);
    assert_eq!(listener.solution_count(), 1);
    assert_eq!(listener.ended_count(), 1);
}

#[test]
fn test_event_support_broadcasts_to_all() {
    let mut support = ProgressEventSupport::new();
    let a = Arc::new(CountingProgressListener::new());
    let b = Arc::new(CountingProgressListener::new());
    support.add_listener(a.clone());
    support.add_listener(b.clone());
    support.add_listener(Arc::new(LoggingProgressListener::verbose(true)));

    support.on_solution_found(1, 0, Duration::ZERO);

    assert_eq!(a.solution_count(), 1);
    assert_eq!(b.solution_count(), 1);
}

#[test]
fn test_event_support_clear_listeners() {
    let mut support = ProgressEventSupport::new();
    support.add_listener(Arc::new(NoopProgressListener));
    assert!(support.has_listeners());

    support.clear_listeners();
    assert!(!support.has_listeners());
}

#[test]
fn test_event_support_debug() {
    let mut support = ProgressEventSupport::new();
    support.add_listener(Arc::new(NoopProgressListener));
    let debug = format!("{:?}", support);
    assert!(debug.contains("listeners: 1"));
}
