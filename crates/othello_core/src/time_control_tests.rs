use super::*;

#[test]
fn test_unbounded_never_stops() {
    let tc = TimeControl::new(None);
    tc.start();
    assert!(!tc.is_stopped());
    assert!(!tc.poll(0));
    assert!(!tc.poll(CHECK_INTERVAL));
}

#[test]
fn test_expired_budget_stops_on_poll() {
    let tc = TimeControl::new(Some(Duration::ZERO));
    tc.start();
    // off-boundary node counts skip the clock read
    assert!(!tc.poll(1));
    assert!(tc.poll(CHECK_INTERVAL));
    assert!(tc.is_stopped());
}

#[test]
fn test_manual_stop() {
    let tc = TimeControl::new(None);
    tc.start();
    tc.stop();
    assert!(tc.is_stopped());
    assert!(tc.poll(1));
}

#[test]
fn test_default_limits() {
    let limits = SearchLimits::default();
    assert_eq!(limits.depth, DEFAULT_DEPTH);
    assert!(limits.move_time.is_none());
}
