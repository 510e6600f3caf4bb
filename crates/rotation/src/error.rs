//! Error types for the orbis-rotation crate.

use std::path::PathBuf;

/// Error type for scheduling operations.
///
/// [`RotationError::EmptyPool`] is the configuration error callers must
/// handle by supplying a fallback dataset list; it is never transient.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RotationError {
    /// Returned when no dataset has a suitable availability tier.
    #[error("no suitable datasets in the rotation pool")]
    EmptyPool,

    /// Returned when two descriptors share the same id.
    #[error("duplicate dataset id: {id}")]
    DuplicateDataset {
        /// The repeated id.
        id: String,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a day range is reversed.
    #[error("invalid day range: start {start} is after end {end}")]
    InvalidRange {
        /// First day of the requested range.
        start: i64,
        /// Last day of the requested range.
        end: i64,
    },

    /// Returned when a query spans more days than [`MAX_QUERY_DAYS`].
    ///
    /// [`MAX_QUERY_DAYS`]: crate::MAX_QUERY_DAYS
    #[error("query spans {days} days, more than the limit of {limit}")]
    RangeTooLarge {
        /// Number of days requested.
        days: u128,
        /// The enforced limit.
        limit: usize,
    },
}

/// Error type for player progress stores.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Returned when the backing file cannot be read or written.
    #[error("progress file {}: {source}", path.display())]
    Io {
        /// Path of the progress file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when stored progress cannot be encoded or decoded.
    #[error("malformed progress in {}: {source}", path.display())]
    Serialization {
        /// Path of the progress file.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}
