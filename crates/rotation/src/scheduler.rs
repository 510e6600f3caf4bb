//! The rotation scheduler: one dataset id per day index.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::RotationConfig;
use crate::descriptor::{DatasetDescriptor, suitable_pool};
use crate::error::RotationError;
use crate::permutation;

/// Deterministic daily dataset scheduler.
///
/// Day indices are split into cycles of `pool_size` days. Each cycle is a
/// permutation of the pool, rebuilt from seeds on every query, so the same
/// day always yields the same dataset and nothing is ever stored.
///
/// The scheduler is immutable after construction and safe to share across
/// threads.
///
/// # Example
///
/// ```
/// use orbis_rotation::{RotationConfig, RotationScheduler};
///
/// let config = RotationConfig::new()
///     .with_seed("test")
///     .with_featured(["a", "b"])
///     .with_featured_fraction(0.5);
/// let scheduler = RotationScheduler::from_pool(["a", "b", "c", "d"], config).unwrap();
/// let week: Vec<&str> = (0..4).map(|d| scheduler.dataset_for_day(d)).collect();
/// assert_eq!(week, ["a", "d", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct RotationScheduler {
    pool: Vec<String>,
    featured: Vec<String>,
    exploratory: Vec<String>,
    config: RotationConfig,
    fraction: f64,
}

impl RotationScheduler {
    /// Builds a scheduler over the suitable datasets of a registry.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::EmptyPool`] if no descriptor is suitable,
    /// [`RotationError::DuplicateDataset`] on repeated ids, and
    /// [`RotationError::InvalidConfig`] if `config` fails validation.
    pub fn new(
        descriptors: &[DatasetDescriptor],
        config: RotationConfig,
    ) -> Result<Self, RotationError> {
        let pool = suitable_pool(descriptors)?;
        Self::from_pool(pool, config)
    }

    /// Builds a scheduler over an explicit, already-filtered pool.
    ///
    /// # Errors
    ///
    /// See [`RotationScheduler::new`].
    pub fn from_pool<I, S>(pool: I, config: RotationConfig) -> Result<Self, RotationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        let pool: Vec<String> = pool.into_iter().map(Into::into).collect();
        if pool.is_empty() {
            return Err(RotationError::EmptyPool);
        }
        let mut seen = HashSet::with_capacity(pool.len());
        for id in &pool {
            if !seen.insert(id.as_str()) {
                return Err(RotationError::DuplicateDataset { id: id.clone() });
            }
        }

        let wanted: HashSet<&str> = config.featured().iter().map(String::as_str).collect();
        for id in config.featured() {
            if !seen.contains(id.as_str()) {
                debug!(id = %id, "featured dataset not in suitable pool; ignored");
            }
        }
        let (featured, exploratory): (Vec<String>, Vec<String>) = pool
            .iter()
            .cloned()
            .partition(|id| wanted.contains(id.as_str()));

        let fraction = config.effective_featured_fraction();
        if fraction != config.featured_fraction() {
            warn!(
                configured = config.featured_fraction(),
                clamped = fraction,
                "featured_fraction outside [0, 1]; clamped"
            );
        }

        info!(
            pool_size = pool.len(),
            featured = featured.len(),
            weighting = config.weighting_enabled(),
            "rotation scheduler ready"
        );

        Ok(Self {
            pool,
            featured,
            exploratory,
            config,
            fraction,
        })
    }

    // --- Accessors ---

    /// Returns the number of datasets in rotation (the cycle length).
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Returns the pool ids in registry order.
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Returns the featured ids present in the pool.
    pub fn featured(&self) -> &[String] {
        &self.featured
    }

    /// Returns `true` if `id` is a featured pool dataset.
    pub fn is_featured(&self, id: &str) -> bool {
        self.featured.iter().any(|f| f == id)
    }

    /// Returns the configuration this scheduler was built with.
    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Returns `true` when cycles are built by the weighted interleave.
    ///
    /// Weighting needs both a featured and an exploratory dataset.
    pub fn weighting_active(&self) -> bool {
        self.config.weighting_enabled() && !self.featured.is_empty() && !self.exploratory.is_empty()
    }

    /// Returns the cycle containing `day`.
    pub fn cycle_of(&self, day: i64) -> i64 {
        day.div_euclid(self.pool_len())
    }

    /// Returns the 0-based position of `day` within its cycle.
    pub fn position_of(&self, day: i64) -> usize {
        // rem_euclid is in 0..pool_size.
        day.rem_euclid(self.pool_len()) as usize
    }

    fn pool_len(&self) -> i64 {
        self.pool.len() as i64
    }

    // --- Scheduling ---

    /// Builds the permutation for `cycle` before the cycle seam is applied.
    fn raw_pattern(&self, cycle: i64) -> Vec<&str> {
        let pool: Vec<&str> = self.pool.iter().map(String::as_str).collect();
        let seed = self.config.seed();
        if !self.weighting_active() {
            return permutation::unweighted(&pool, seed, cycle);
        }
        let featured: Vec<&str> = self.featured.iter().map(String::as_str).collect();
        let exploratory: Vec<&str> = self.exploratory.iter().map(String::as_str).collect();
        let candidate = permutation::weighted(&featured, &exploratory, self.fraction, seed, cycle);
        permutation::checked_or_unweighted(candidate, &pool, seed, cycle)
    }

    /// Returns the ordered datasets for `cycle`.
    ///
    /// Every pool id appears exactly once. For pools of three or more, a
    /// cycle never opens with the dataset that closed the previous one: the
    /// first two entries are swapped when they would. A pool of two repeats
    /// cycle 0's order forever, which is the only strictly alternating schedule.
    pub fn cycle_permutation(&self, cycle: i64) -> Vec<&str> {
        match self.pool.len() {
            1 => vec![self.pool[0].as_str()],
            2 => self.raw_pattern(0),
            _ => {
                let mut pattern = self.raw_pattern(cycle);
                let previous = self.raw_pattern(cycle.saturating_sub(1));
                if pattern.first() == previous.last() {
                    debug!(cycle, "cycle opens with previous cycle's last dataset; swapping");
                    pattern.swap(0, 1);
                }
                pattern
            }
        }
    }

    fn base_dataset_for_day(&self, day: i64) -> &str {
        let pattern = self.cycle_permutation(self.cycle_of(day));
        pattern[self.position_of(day)]
    }

    /// Returns the dataset id scheduled for `day`.
    ///
    /// Any integer is accepted; negative days belong to negative cycles.
    pub fn dataset_for_day(&self, day: i64) -> &str {
        avoid_repeat(day, self.pool.len(), |d| self.base_dataset_for_day(d))
    }
}

/// Replaces `base(day)` when it equals `base(day - 1)`.
///
/// Scans `day + 1 .. day + pool_size` for the first dataset that differs
/// from yesterday's. A pool of one is returned unchanged.
pub(crate) fn avoid_repeat<'a>(
    day: i64,
    pool_size: usize,
    base: impl Fn(i64) -> &'a str,
) -> &'a str {
    let today = base(day);
    if pool_size <= 1 {
        return today;
    }
    let yesterday = base(day.saturating_sub(1));
    if today != yesterday {
        return today;
    }
    for offset in 1..pool_size as i64 {
        let candidate = base(day.saturating_add(offset));
        if candidate != yesterday {
            debug!(day, offset, dataset = candidate, "repeat avoided by look-ahead");
            return candidate;
        }
    }
    today
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> RotationScheduler {
        let config = RotationConfig::new()
            .with_seed("test")
            .with_featured(["a", "b"])
            .with_featured_fraction(0.5);
        RotationScheduler::from_pool(["a", "b", "c", "d"], config).unwrap()
    }

    #[test]
    fn example_scenario() {
        let s = abcd();
        let days: Vec<&str> = (0..4).map(|d| s.dataset_for_day(d)).collect();
        assert_eq!(days, ["a", "d", "b", "c"]);
        let again: Vec<&str> = (0..4).map(|d| s.dataset_for_day(d)).collect();
        assert_eq!(days, again);
    }

    #[test]
    fn second_cycle() {
        let s = abcd();
        let days: Vec<&str> = (4..8).map(|d| s.dataset_for_day(d)).collect();
        assert_eq!(days, ["b", "c", "a", "d"]);
    }

    #[test]
    fn cycle_and_position() {
        let s = abcd();
        assert_eq!(s.cycle_of(0), 0);
        assert_eq!(s.cycle_of(3), 0);
        assert_eq!(s.cycle_of(4), 1);
        assert_eq!(s.cycle_of(-1), -1);
        assert_eq!(s.position_of(-1), 3);
        assert_eq!(s.position_of(9), 1);
    }

    #[test]
    fn empty_pool_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(
            RotationScheduler::from_pool(empty, RotationConfig::new()).unwrap_err(),
            RotationError::EmptyPool
        );
    }

    #[test]
    fn duplicate_pool_rejected() {
        assert!(matches!(
            RotationScheduler::from_pool(["a", "b", "a"], RotationConfig::new()),
            Err(RotationError::DuplicateDataset { .. })
        ));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = RotationConfig::new().with_featured_fraction(f64::NAN);
        assert!(matches!(
            RotationScheduler::from_pool(["a"], config),
            Err(RotationError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn empty_seed_and_infinite_fraction_accepted() {
        let config = RotationConfig::new()
            .with_seed("")
            .with_featured(["a"])
            .with_featured_fraction(f64::INFINITY);
        let s = RotationScheduler::from_pool(["a", "b", "c"], config).unwrap();
        assert_eq!(s.config().effective_featured_fraction(), 1.0);
        for cycle in 0..5 {
            assert_eq!(s.cycle_permutation(cycle).len(), 3);
        }
    }

    #[test]
    fn single_dataset_every_day() {
        let s = RotationScheduler::from_pool(["only"], RotationConfig::new()).unwrap();
        for d in -10..400 {
            assert_eq!(s.dataset_for_day(d), "only");
        }
    }

    #[test]
    fn two_datasets_alternate() {
        let s = RotationScheduler::from_pool(["x", "y"], RotationConfig::new()).unwrap();
        for d in -6..50 {
            assert_ne!(s.dataset_for_day(d), s.dataset_for_day(d + 1), "day {d}");
        }
    }

    #[test]
    fn weighting_requires_both_partitions() {
        let all_featured = RotationConfig::new().with_featured(["a", "b"]);
        let s = RotationScheduler::from_pool(["a", "b"], all_featured).unwrap();
        assert!(!s.weighting_active());

        let disabled = RotationConfig::new()
            .with_featured(["a"])
            .with_weighting(false);
        let s = RotationScheduler::from_pool(["a", "b", "c"], disabled).unwrap();
        assert!(!s.weighting_active());

        assert!(abcd().weighting_active());
    }

    #[test]
    fn unknown_featured_ids_ignored() {
        let config = RotationConfig::new().with_featured(["a", "ghost"]);
        let s = RotationScheduler::from_pool(["a", "b", "c"], config).unwrap();
        assert_eq!(s.featured(), ["a"]);
        assert!(s.is_featured("a"));
        assert!(!s.is_featured("ghost"));
    }

    #[test]
    fn cycle_seam_never_repeats() {
        let config = RotationConfig::new().with_seed("seam");
        let s = RotationScheduler::from_pool(["p", "q", "r"], config).unwrap();
        for cycle in -5..40 {
            let prev = s.cycle_permutation(cycle - 1);
            let next = s.cycle_permutation(cycle);
            assert_ne!(prev.last(), next.first(), "cycle {cycle}");
        }
    }

    #[test]
    fn avoid_repeat_looks_ahead() {
        let schedule = ["a", "a", "a", "b", "c"];
        let base = |d: i64| schedule[d.clamp(0, 4) as usize];
        // Day 1 repeats day 0 and day 2 is also "a"; day 3 is the first that differs.
        assert_eq!(avoid_repeat(1, 3, base), "b");
        // Look-ahead is bounded by pool_size - 1 offsets.
        assert_eq!(avoid_repeat(1, 2, base), "a");
        assert_eq!(avoid_repeat(4, 3, base), "c");
    }

    #[test]
    fn avoid_repeat_single_pool_is_noop() {
        assert_eq!(avoid_repeat(7, 1, |_| "same"), "same");
    }

    #[test]
    fn scheduler_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<RotationScheduler>();
    }
}
