//! Day index resolution anchored to a fixed daily reset hour in UTC.

use chrono::{DateTime, Utc};

use crate::error::CalendarError;
use crate::window::ChallengeWindow;

/// Milliseconds in one hour.
pub const MS_PER_HOUR: i64 = 3_600_000;

/// Milliseconds in one 24-hour day bucket.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Default hour (UTC) at which a new daily challenge begins.
pub const DEFAULT_RESET_HOUR_UTC: u8 = 5;

/// Default number of day indices before the index wraps to zero.
pub const DEFAULT_CYCLE_LENGTH_DAYS: u32 = 365;

/// Maps wall-clock instants to a cycling day index.
///
/// Days are 24-hour buckets starting at `reset_hour_utc`. The raw bucket
/// number grows monotonically with time; the day index is that number
/// folded into `0..cycle_length_days` with a non-negative remainder, so
/// instants before the Unix epoch resolve just as well as later ones.
/// Local timezones and DST never enter the computation.
///
/// # Example
///
/// ```
/// use orbis_calendar::DayClock;
///
/// let clock = DayClock::new(5, 365).unwrap();
/// // One millisecond before the first reset after the epoch.
/// assert_eq!(clock.day_index(5 * 3_600_000 - 1), 364);
/// // Exactly at the reset.
/// assert_eq!(clock.day_index(5 * 3_600_000), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClock {
    reset_hour_utc: u8,
    cycle_length_days: u32,
}

impl DayClock {
    /// Creates a clock for the given reset hour and cycle length.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidResetHour`] if `reset_hour_utc` is not
    /// in 0..=23, and [`CalendarError::InvalidCycleLength`] if
    /// `cycle_length_days` is zero.
    pub fn new(reset_hour_utc: u8, cycle_length_days: u32) -> Result<Self, CalendarError> {
        if reset_hour_utc > 23 {
            return Err(CalendarError::InvalidResetHour {
                hour: reset_hour_utc,
            });
        }
        if cycle_length_days == 0 {
            return Err(CalendarError::InvalidCycleLength {
                days: cycle_length_days,
            });
        }
        Ok(Self {
            reset_hour_utc,
            cycle_length_days,
        })
    }

    /// Returns the reset hour (UTC).
    pub fn reset_hour_utc(&self) -> u8 {
        self.reset_hour_utc
    }

    /// Returns the cycle length in days.
    pub fn cycle_length_days(&self) -> u32 {
        self.cycle_length_days
    }

    fn reset_offset_ms(&self) -> i64 {
        i64::from(self.reset_hour_utc) * MS_PER_HOUR
    }

    /// Returns the unbounded day bucket containing `now_ms`.
    ///
    /// The bucket number increments exactly at each reset instant.
    pub fn raw_day(&self, now_ms: i64) -> i64 {
        now_ms
            .saturating_sub(self.reset_offset_ms())
            .div_euclid(MS_PER_DAY)
    }

    /// Returns the day index in `0..cycle_length_days` for `now_ms`.
    pub fn day_index(&self, now_ms: i64) -> u32 {
        let n = i64::from(self.cycle_length_days);
        // rem_euclid keeps the result in 0..n, so the cast cannot truncate.
        self.raw_day(now_ms).rem_euclid(n) as u32
    }

    /// Returns the day index for a UTC instant.
    pub fn day_index_at(&self, now: DateTime<Utc>) -> u32 {
        self.day_index(now.timestamp_millis())
    }

    /// Returns the day index for the current wall-clock time.
    ///
    /// Never cached: every call reads the system clock.
    pub fn current_day_index(&self) -> u32 {
        self.day_index_at(Utc::now())
    }

    /// Returns the instant (ms since epoch) at which the day containing
    /// `now_ms` started.
    pub fn day_start_ms(&self, now_ms: i64) -> i64 {
        self.raw_day(now_ms)
            .saturating_mul(MS_PER_DAY)
            .saturating_add(self.reset_offset_ms())
    }

    /// Returns the instant (ms since epoch) of the next reset after `now_ms`.
    pub fn next_reset_ms(&self, now_ms: i64) -> i64 {
        self.day_start_ms(now_ms).saturating_add(MS_PER_DAY)
    }

    /// Resolves the full challenge window containing `now`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::TimestampOutOfRange`] if the window bounds
    /// cannot be represented as UTC instants.
    pub fn window(&self, now: DateTime<Utc>) -> Result<ChallengeWindow, CalendarError> {
        let now_ms = now.timestamp_millis();
        let start_ms = self.day_start_ms(now_ms);
        let next_ms = self.next_reset_ms(now_ms);
        let starts_at = DateTime::<Utc>::from_timestamp_millis(start_ms)
            .ok_or(CalendarError::TimestampOutOfRange { ms: start_ms })?;
        let next_reset = DateTime::<Utc>::from_timestamp_millis(next_ms)
            .ok_or(CalendarError::TimestampOutOfRange { ms: next_ms })?;
        Ok(ChallengeWindow::new(
            self.day_index(now_ms),
            self.raw_day(now_ms),
            starts_at,
            next_reset,
        ))
    }

    /// Resolves the challenge window for the current wall-clock time.
    ///
    /// # Errors
    ///
    /// See [`DayClock::window`].
    pub fn current_window(&self) -> Result<ChallengeWindow, CalendarError> {
        self.window(Utc::now())
    }
}

impl Default for DayClock {
    fn default() -> Self {
        Self {
            reset_hour_utc: DEFAULT_RESET_HOUR_UTC,
            cycle_length_days: DEFAULT_CYCLE_LENGTH_DAYS,
        }
    }
}
