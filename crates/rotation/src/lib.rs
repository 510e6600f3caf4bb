//! Deterministic daily dataset rotation for the Orbis globe game.
//!
//! Given a day index, the scheduler picks exactly one dataset from the
//! suitable pool. Each cycle of `pool_size` days uses every dataset once,
//! consecutive days never share a dataset, featured datasets arrive at a
//! configurable rate, and the whole schedule is rebuilt from a seed string
//! on demand.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────────┐     ┌─────────────────────┐     ┌──────────────────┐
//!  │ DatasetDescriptor │────▶│  suitable pool +     │────▶│ cycle permutation │
//!  │  (registry)       │     │  featured partition  │     │ (weighted/plain)  │
//!  └──────────────────┘     └─────────────────────┘     └────────┬─────────┘
//!                                                                │
//!                                         day index ──▶ no-repeat look-ahead ──▶ dataset id
//! ```
//!
//! # Quick start
//!
//! ```
//! use orbis_rotation::{AvailabilityTier, DatasetDescriptor, RotationConfig, RotationScheduler};
//!
//! let registry = vec![
//!     DatasetDescriptor::new("gdp_per_capita", "economy", AvailabilityTier::High),
//!     DatasetDescriptor::new("life_expectancy", "health", AvailabilityTier::High),
//!     DatasetDescriptor::new("forest_area", "environment", AvailabilityTier::Medium),
//!     DatasetDescriptor::new("moss_density", "environment", AvailabilityTier::Low),
//! ];
//! let config = RotationConfig::new().with_featured(["gdp_per_capita"]);
//! let scheduler = RotationScheduler::new(&registry, config).unwrap();
//!
//! assert_eq!(scheduler.pool_size(), 3);
//! let today = scheduler.dataset_for_day(42);
//! assert_ne!(today, scheduler.dataset_for_day(41));
//! ```

mod config;
mod descriptor;
mod error;
mod history;
mod permutation;
mod progress;
mod scheduler;
mod verify;

pub use config::{DEFAULT_FEATURED_FRACTION, DEFAULT_SEED, RotationConfig};
pub use descriptor::{AvailabilityTier, DatasetDescriptor, suitable_pool};
pub use error::{ProgressError, RotationError};
pub use history::{DatasetHistory, HistoryEntry, MAX_QUERY_DAYS, RotationStats};
pub use progress::{
    FileProgressStore, MemoryProgressStore, PlayerProgress, PlayerProgressStore, load_or_reset,
};
pub use scheduler::RotationScheduler;
pub use verify::{CycleCoverage, VerificationReport};
