//! Error types for the orbis-calendar crate.

/// Error type for all fallible operations in the orbis-calendar crate.
///
/// Covers validation of the daily reset configuration and timestamps that
/// fall outside the range representable by `chrono`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when the reset hour is outside 0..=23.
    #[error("invalid reset hour: {hour} (must be 0..=23)")]
    InvalidResetHour {
        /// The invalid hour that was provided.
        hour: u8,
    },

    /// Returned when the cycle length is zero.
    #[error("invalid cycle length: {days} days (must be >= 1)")]
    InvalidCycleLength {
        /// The invalid cycle length that was provided.
        days: u32,
    },

    /// Returned when a millisecond timestamp cannot be represented as a UTC instant.
    #[error("timestamp out of range: {ms} ms since epoch")]
    TimestampOutOfRange {
        /// The offending timestamp in milliseconds since the Unix epoch.
        ms: i64,
    },
}
