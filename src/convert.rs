//! Pure conversion functions: TOML config plus CLI overrides -> crate API types.

use anyhow::{Context, Result};
use orbis_calendar::DayClock;
use orbis_rotation::{RotationConfig, RotationError, RotationScheduler};
use tracing::warn;

use crate::cli::ScheduleArgs;
use crate::config::{OrbisConfig, RotationToml, ScheduleToml};

/// Builds a [`DayClock`] from the schedule section and overrides.
pub fn build_day_clock(schedule: &ScheduleToml, overrides: &ScheduleArgs) -> Result<DayClock> {
    let reset_hour = overrides.reset_hour.unwrap_or(schedule.reset_hour_utc);
    let cycle_length = overrides.cycle_length.unwrap_or(schedule.cycle_length_days);
    DayClock::new(reset_hour, cycle_length).context("invalid schedule configuration")
}

/// Builds a [`RotationConfig`] from the rotation section and overrides.
pub fn build_rotation_config(rotation: &RotationToml, overrides: &ScheduleArgs) -> RotationConfig {
    let seed = overrides
        .seed
        .clone()
        .unwrap_or_else(|| rotation.seed.clone());
    RotationConfig::new()
        .with_seed(seed)
        .with_featured(rotation.featured.iter().cloned())
        .with_featured_fraction(
            overrides
                .featured_fraction
                .unwrap_or(rotation.featured_fraction),
        )
        .with_weighting(overrides.weighting.unwrap_or(rotation.weighting_enabled))
}

/// Builds the scheduler over the registry's suitable datasets.
///
/// When the registry has no suitable dataset and `[rotation].fallback` is
/// non-empty, the fallback list becomes the pool instead.
pub fn build_scheduler(config: &OrbisConfig, overrides: &ScheduleArgs) -> Result<RotationScheduler> {
    let rotation = build_rotation_config(&config.rotation, overrides);
    match RotationScheduler::new(&config.datasets, rotation.clone()) {
        Err(RotationError::EmptyPool) if !config.rotation.fallback.is_empty() => {
            warn!(
                registered = config.datasets.len(),
                fallback = config.rotation.fallback.len(),
                "no suitable dataset in registry; using fallback pool"
            );
            RotationScheduler::from_pool(config.rotation.fallback.iter().cloned(), rotation)
                .context("invalid fallback pool")
        }
        other => other.context("failed to build rotation scheduler"),
    }
}
