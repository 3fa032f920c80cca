//! Tests for Debouncer

use super::*;
use proptest::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_nothing_pending_initially() {
    let mut debouncer = Debouncer::new(200);
    assert!(!debouncer.is_pending());
    assert!(debouncer.deadline().is_none());
    assert!(debouncer.poll(Instant::now()).is_none());
}

#[test]
fn test_value_not_delivered_before_window() {
    let mut debouncer = Debouncer::new(200);
    let start = Instant::now();
    debouncer.schedule("ca".to_string(), start);

    assert_eq!(debouncer.deadline(), Some(start + ms(200)));
    assert!(debouncer.poll(start + ms(199)).is_none());
    assert!(debouncer.is_pending());
}

#[test]
fn test_value_delivered_once_at_deadline() {
    let mut debouncer = Debouncer::new(200);
    let start = Instant::now();
    debouncer.schedule("ca".to_string(), start);

    assert_eq!(debouncer.poll(start + ms(200)), Some("ca".to_string()));
    assert!(debouncer.poll(start + ms(400)).is_none());
    assert!(!debouncer.is_pending());
}

#[test]
fn test_schedule_resets_timer_and_supersedes_value() {
    let mut debouncer = Debouncer::new(200);
    let start = Instant::now();
    debouncer.schedule("c".to_string(), start);
    debouncer.schedule("ca".to_string(), start + ms(150));

    // The first deadline has passed but the timer was reset
    assert!(debouncer.poll(start + ms(250)).is_none());
    assert_eq!(debouncer.poll(start + ms(350)), Some("ca".to_string()));
}

#[test]
fn test_flush_ignores_window() {
    let mut debouncer = Debouncer::new(200);
    debouncer.schedule("cat".to_string(), Instant::now());
    assert_eq!(debouncer.flush(), Some("cat".to_string()));
    assert!(debouncer.flush().is_none());
}

#[test]
fn test_cancel_drops_pending_value() {
    let mut debouncer = Debouncer::new(200);
    let start = Instant::now();
    debouncer.schedule("cat".to_string(), start);
    debouncer.cancel();
    assert!(debouncer.poll(start + ms(1000)).is_none());
}

// For any burst of keystrokes spaced closer than the window, exactly one
// value is delivered and it is the last one typed.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_burst_delivers_only_last_value(
        values in prop::collection::vec("[a-z]{0,8}", 1..20),
        gaps in prop::collection::vec(0u64..200, 20),
    ) {
        let mut debouncer = Debouncer::new(200);
        let mut now = Instant::now();
        let mut delivered = Vec::new();

        for (value, gap) in values.iter().zip(gaps.iter()) {
            if let Some(v) = debouncer.poll(now) {
                delivered.push(v);
            }
            debouncer.schedule(value.clone(), now);
            now += ms(*gap);
        }
        if let Some(v) = debouncer.poll(now) {
            delivered.push(v);
        }
        if let Some(v) = debouncer.poll(now + ms(200)) {
            delivered.push(v);
        }

        prop_assert_eq!(delivered.len(), 1);
        prop_assert_eq!(&delivered[0], values.last().unwrap());
    }
}
