//! Tests for termination and stall detection.

use std::thread;
use std::time::Duration;

use super::*;
use crate::event::ProgressListener;

#[test]
fn test_deadline_zero_is_reached() {
    let deadline = Deadline::after(Some(Duration::ZERO));
    assert!(deadline.is_reached());
    assert_eq!(deadline.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_deadline_unbounded_never_reached() {
    let deadline = Deadline::after(None);
    assert!(!deadline.is_reached());
    assert_eq!(deadline.limit(), None);
}

#[test]
fn test_deadline_seconds() {
    let deadline = Deadline::seconds(60);
    assert!(!deadline.is_reached());
    assert!(deadline.remaining().unwrap() <= Duration::from_secs(60));
}

#[test]
fn test_deadline_passes() {
    let deadline = Deadline::after(Some(Duration::from_millis(5)));
    thread::sleep(Duration::from_millis(20));
    assert!(deadline.is_reached());
}

#[test]
fn test_stall_not_reported_under_threshold() {
    let monitor = StallMonitor::new(Duration::from_secs(600));
    assert!(!monitor.is_stalled());
    assert!(!monitor.check_stalling());
    assert_eq!(monitor.warning_count(), 0);
}

#[test]
fn test_stall_warns_once_per_window() {
    let monitor = StallMonitor::new(Duration::ZERO);
    assert!(monitor.check_stalling());
    assert!(monitor.check_stalling());
    assert_eq!(monitor.warning_count(), 1);

    monitor.on_solution_found(1, 0, Duration::ZERO);
    assert!(monitor.check_stalling());
    assert_eq!(monitor.warning_count(), 2);
}

#[test]
fn test_polling_drives_the_check() {
    let monitor = StallMonitor::new(Duration::ZERO);
    monitor.on_poll(Duration::ZERO);
    monitor.on_poll(Duration::ZERO);
    assert_eq!(monitor.warning_count(), 1);
}

#[test]
fn test_improvement_resets_clock() {
    let monitor = StallMonitor::new(Duration::from_millis(10));
    thread::sleep(Duration::from_millis(20));
    assert!(monitor.is_stalled());
    monitor.record_improvement();
    assert!(monitor.time_since_last_improvement() < Duration::from_millis(10));
}
