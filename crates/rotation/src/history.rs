//! Day-range history and snapshot statistics.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::RotationError;
use crate::scheduler::RotationScheduler;

/// Largest number of days a single history or verification query may span.
pub const MAX_QUERY_DAYS: usize = 1_000_000;

/// Rejects a day count above [`MAX_QUERY_DAYS`].
pub(crate) fn check_query_days(days: u128) -> Result<usize, RotationError> {
    match usize::try_from(days) {
        Ok(n) if n <= MAX_QUERY_DAYS => Ok(n),
        _ => Err(RotationError::RangeTooLarge {
            days,
            limit: MAX_QUERY_DAYS,
        }),
    }
}

/// The dataset scheduled for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// Day index.
    pub day_index: i64,
    /// Scheduled dataset id.
    pub dataset_id: String,
    /// Whether the dataset is in the featured set.
    pub featured: bool,
}

/// Schedule over an inclusive day range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetHistory {
    /// One entry per day, in day order.
    pub history: Vec<HistoryEntry>,
    /// Number of distinct dataset ids in `history`.
    pub unique_datasets_used: usize,
    /// Number of days in the range.
    pub total_days: usize,
}

/// Snapshot of where a day sits in the rotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotationStats {
    /// Datasets in the suitable pool.
    pub total_available_datasets: usize,
    /// Cycle containing the day.
    pub current_cycle: i64,
    /// 0-based position of the day within its cycle.
    pub position_in_cycle: usize,
    /// Days left in the cycle, the given day included.
    pub days_until_new_cycle: usize,
    /// Consecutive days guaranteed distinct; the cycle length.
    pub guaranteed_unique_days: usize,
    /// Featured datasets present in the pool.
    pub featured_datasets: usize,
    /// Whether cycles use the weighted interleave.
    pub weighting_active: bool,
    /// Featured fraction after clamping to `[0, 1]`.
    pub featured_fraction: f64,
    /// Pool ids in registry order.
    pub dataset_list: Vec<String>,
}

impl RotationScheduler {
    /// Returns the schedule for every day in `start_day..=end_day`.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::InvalidRange`] if `start_day > end_day`, and
    /// [`RotationError::RangeTooLarge`] if the range spans more than
    /// [`MAX_QUERY_DAYS`] days.
    #[tracing::instrument(skip(self))]
    pub fn history(&self, start_day: i64, end_day: i64) -> Result<DatasetHistory, RotationError> {
        if start_day > end_day {
            return Err(RotationError::InvalidRange {
                start: start_day,
                end: end_day,
            });
        }
        // i128 holds any i64 span without overflow.
        let span = i128::from(end_day) - i128::from(start_day) + 1;
        check_query_days(span.unsigned_abs())?;
        let history: Vec<HistoryEntry> = (start_day..=end_day)
            .map(|day| {
                let id = self.dataset_for_day(day);
                HistoryEntry {
                    day_index: day,
                    dataset_id: id.to_string(),
                    featured: self.is_featured(id),
                }
            })
            .collect();
        let unique_datasets_used = history
            .iter()
            .map(|e| e.dataset_id.as_str())
            .collect::<BTreeSet<_>>()
            .len();
        let total_days = history.len();
        Ok(DatasetHistory {
            history,
            unique_datasets_used,
            total_days,
        })
    }

    /// Returns rotation statistics as seen from `day_index`.
    pub fn stats(&self, day_index: i64) -> RotationStats {
        let position = self.position_of(day_index);
        RotationStats {
            total_available_datasets: self.pool_size(),
            current_cycle: self.cycle_of(day_index),
            position_in_cycle: position,
            days_until_new_cycle: self.pool_size() - position,
            guaranteed_unique_days: self.pool_size(),
            featured_datasets: self.featured().len(),
            weighting_active: self.weighting_active(),
            featured_fraction: self.config().effective_featured_fraction(),
            dataset_list: self.pool().to_vec(),
        }
    }
}
