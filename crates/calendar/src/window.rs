//! The daily challenge window: which day it is and when it ends.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// The 24-hour window containing a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeWindow {
    day_index: u32,
    raw_day: i64,
    starts_at: DateTime<Utc>,
    next_reset: DateTime<Utc>,
}

impl ChallengeWindow {
    pub(crate) fn new(
        day_index: u32,
        raw_day: i64,
        starts_at: DateTime<Utc>,
        next_reset: DateTime<Utc>,
    ) -> Self {
        Self {
            day_index,
            raw_day,
            starts_at,
            next_reset,
        }
    }

    /// Returns the cycling day index.
    pub fn day_index(&self) -> u32 {
        self.day_index
    }

    /// Returns the unbounded day bucket number.
    pub fn raw_day(&self) -> i64 {
        self.raw_day
    }

    /// Returns the UTC calendar date on which this challenge started.
    pub fn challenge_date(&self) -> NaiveDate {
        self.starts_at.date_naive()
    }

    /// Returns the instant this window opened.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    /// Returns the instant of the next reset.
    pub fn next_reset(&self) -> DateTime<Utc> {
        self.next_reset
    }

    /// Returns the time left until the next reset, floored at zero.
    pub fn remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.next_reset - now).max(TimeDelta::zero())
    }

    /// Returns `true` if `instant` falls inside this window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.starts_at <= instant && instant < self.next_reset
    }
}
