use chrono::{DateTime, TimeDelta, Utc};
use orbis_calendar::{CalendarError, DayClock, MS_PER_DAY, MS_PER_HOUR};

fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

#[test]
fn one_ms_around_first_reset() {
    let clock = DayClock::new(5, 365).unwrap();
    let reset = 5 * 3600 * 1000;
    // raw = floor(-1 / 86_400_000) = -1, folded into 0..365.
    assert_eq!(clock.day_index(reset - 1), 364);
    assert_eq!(clock.day_index(reset + 1), 0);
}

#[test]
fn reset_boundary_increments_by_one() {
    let clock = DayClock::default();
    let boundary = utc("2025-06-15T05:00:00Z").timestamp_millis();
    let before = clock.day_index(boundary - 1);
    let at = clock.day_index(boundary);
    let after = clock.day_index(boundary + 1);
    assert_eq!(before, 178);
    assert_eq!(at, 179);
    assert_eq!(after, 179);
    assert_eq!((before + 1) % 365, at);
}

#[test]
fn wraps_after_full_cycle() {
    let clock = DayClock::default();
    let cycle_ms = 365 * MS_PER_DAY;
    for t1 in [
        0,
        123_456_789,
        utc("2024-02-29T13:00:00Z").timestamp_millis(),
        -987_654_321_000,
    ] {
        assert_eq!(clock.day_index(t1), clock.day_index(t1 + cycle_ms));
        assert_eq!(clock.raw_day(t1) + 365, clock.raw_day(t1 + cycle_ms));
    }
}

#[test]
fn raw_day_is_monotonic() {
    let clock = DayClock::default();
    let start = utc("2023-12-25T00:00:00Z").timestamp_millis();
    let mut prev = clock.raw_day(start);
    for step in 1..200 {
        let raw = clock.raw_day(start + step * 7 * MS_PER_HOUR);
        assert!(raw == prev || raw == prev + 1, "raw day jumped at step {step}");
        prev = raw;
    }
}

#[test]
fn index_wraps_from_last_to_first() {
    let clock = DayClock::new(5, 365).unwrap();
    // Raw day 364 is the last index of cycle 0; raw day 365 wraps to 0.
    let last = 364 * MS_PER_DAY + 5 * MS_PER_HOUR;
    assert_eq!(clock.day_index(last), 364);
    assert_eq!(clock.day_index(last + MS_PER_DAY), 0);
}

#[test]
fn independent_of_offset_representation() {
    // The same instant expressed in two offsets maps to the same index.
    let clock = DayClock::default();
    let a = DateTime::parse_from_rfc3339("2024-07-01T02:00:00-05:00")
        .unwrap()
        .with_timezone(&Utc);
    let b = utc("2024-07-01T07:00:00Z");
    assert_eq!(clock.day_index_at(a), clock.day_index_at(b));
}

#[test]
fn window_tracks_index() {
    let clock = DayClock::default();
    let now = utc("2024-01-01T12:30:00Z");
    let w = clock.window(now).unwrap();
    assert_eq!(w.day_index(), clock.day_index_at(now));
    assert_eq!(w.next_reset() - w.starts_at(), TimeDelta::days(1));
}

#[test]
fn current_index_in_range() {
    let clock = DayClock::new(0, 30).unwrap();
    assert!(clock.current_day_index() < 30);
    let w = clock.current_window().unwrap();
    assert!(w.day_index() < 30);
}

#[test]
fn invalid_configuration() {
    assert!(matches!(
        DayClock::new(99, 365),
        Err(CalendarError::InvalidResetHour { hour: 99 })
    ));
    assert!(matches!(
        DayClock::new(5, 0),
        Err(CalendarError::InvalidCycleLength { days: 0 })
    ));
}
