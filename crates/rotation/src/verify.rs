//! Whole-cycle verification of the schedule.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::RotationError;
use crate::history::check_query_days;
use crate::scheduler::RotationScheduler;

/// Coverage failure for one cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleCoverage {
    /// Cycle number.
    pub cycle: i64,
    /// Distinct datasets scheduled in the cycle.
    pub distinct: usize,
    /// Pool datasets never scheduled in the cycle.
    pub missing: Vec<String>,
    /// Datasets scheduled more than once in the cycle.
    pub duplicated: Vec<String>,
}

/// Outcome of [`RotationScheduler::verify`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    /// First cycle checked.
    pub start_cycle: i64,
    /// Number of consecutive cycles checked.
    pub cycles_checked: usize,
    /// Days covered by the checked cycles.
    pub days_checked: usize,
    /// Cycles that do not use every pool dataset exactly once.
    pub incomplete_cycles: Vec<CycleCoverage>,
    /// Days whose dataset equals the previous day's.
    pub repeat_days: Vec<i64>,
    /// Days scheduled with a featured dataset.
    pub featured_days: usize,
    /// `featured_days / days_checked`.
    pub featured_share: f64,
}

impl VerificationReport {
    /// Returns `true` when every cycle is complete and no day repeats.
    pub fn is_ok(&self) -> bool {
        self.incomplete_cycles.is_empty() && self.repeat_days.is_empty()
    }
}

impl RotationScheduler {
    /// Checks coverage and repeat-freedom over `cycles` consecutive cycles.
    ///
    /// The day before the first checked cycle is included in the repeat
    /// check so the seam into `start_cycle` is covered too.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::RangeTooLarge`] if `cycles` cycles span more
    /// than [`MAX_QUERY_DAYS`](crate::MAX_QUERY_DAYS) days.
    #[tracing::instrument(skip(self))]
    pub fn verify(
        &self,
        start_cycle: i64,
        cycles: usize,
    ) -> Result<VerificationReport, RotationError> {
        let n = self.pool_size();
        // Both factors are at most 2^64, so the product fits in u128.
        let days_checked = check_query_days(cycles as u128 * n as u128)?;
        let mut incomplete_cycles = Vec::new();
        let mut repeat_days = Vec::new();
        let mut featured_days = 0usize;

        let first_day = start_cycle.saturating_mul(n as i64);
        let mut previous = self.dataset_for_day(first_day.saturating_sub(1));

        for c in 0..cycles as i64 {
            let cycle = start_cycle.saturating_add(c);
            let cycle_start = cycle.saturating_mul(n as i64);
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

            for pos in 0..n as i64 {
                let day = cycle_start.saturating_add(pos);
                let id = self.dataset_for_day(day);
                *counts.entry(id).or_insert(0) += 1;
                if self.is_featured(id) {
                    featured_days += 1;
                }
                if n > 1 && id == previous {
                    repeat_days.push(day);
                }
                previous = id;
            }

            if counts.len() != n || counts.values().any(|&k| k != 1) {
                let used: BTreeSet<&str> = counts.keys().copied().collect();
                let coverage = CycleCoverage {
                    cycle,
                    distinct: counts.len(),
                    missing: self
                        .pool()
                        .iter()
                        .filter(|id| !used.contains(id.as_str()))
                        .cloned()
                        .collect(),
                    duplicated: counts
                        .iter()
                        .filter(|&(_, &k)| k > 1)
                        .map(|(id, _)| id.to_string())
                        .collect(),
                };
                warn!(cycle, distinct = coverage.distinct, "cycle coverage incomplete");
                incomplete_cycles.push(coverage);
            }
        }

        let featured_share = if days_checked == 0 {
            0.0
        } else {
            featured_days as f64 / days_checked as f64
        };
        info!(
            cycles,
            days_checked,
            incomplete = incomplete_cycles.len(),
            repeats = repeat_days.len(),
            "verification finished"
        );

        Ok(VerificationReport {
            start_cycle,
            cycles_checked: cycles,
            days_checked,
            incomplete_cycles,
            repeat_days,
            featured_days,
            featured_share,
        })
    }
}
