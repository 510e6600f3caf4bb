//! Today and day commands: resolve a challenge for an instant or day index.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use orbis_calendar::DayClock;
use orbis_rotation::RotationScheduler;
use serde::Serialize;
use tracing::info_span;

use crate::cli::{DayArgs, ScheduleArgs, TodayArgs};
use crate::config::OrbisConfig;
use crate::{convert, output};

/// One day's challenge as shown to a player.
#[derive(Debug, Serialize)]
pub struct ChallengeRecord {
    pub day_index: u32,
    pub dataset_id: String,
    pub category: Option<String>,
    pub featured: bool,
    pub challenge_date: NaiveDate,
    pub starts_at: DateTime<Utc>,
    pub next_reset: DateTime<Utc>,
}

/// Resolves the challenge active at `at`.
pub fn resolve(
    clock: &DayClock,
    scheduler: &RotationScheduler,
    config: &OrbisConfig,
    at: DateTime<Utc>,
) -> Result<ChallengeRecord> {
    let window = clock.window(at)?;
    let dataset_id = scheduler.dataset_for_day(i64::from(window.day_index()));
    Ok(ChallengeRecord {
        day_index: window.day_index(),
        dataset_id: dataset_id.to_string(),
        category: config.category_of(dataset_id).map(str::to_string),
        featured: scheduler.is_featured(dataset_id),
        challenge_date: window.challenge_date(),
        starts_at: window.starts_at(),
        next_reset: window.next_reset(),
    })
}

/// Print today's challenge.
pub fn run(args: TodayArgs, config: &OrbisConfig, overrides: &ScheduleArgs) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let clock = convert::build_day_clock(&config.schedule, overrides)?;
    let scheduler = convert::build_scheduler(config, overrides)?;
    let record = resolve(&clock, &scheduler, config, args.at.unwrap_or_else(Utc::now))?;
    output::emit(&record, None)
}

/// Print the dataset id for one day index.
pub fn run_day(args: DayArgs, config: &OrbisConfig, overrides: &ScheduleArgs) -> Result<()> {
    let _cmd = info_span!("day").entered();
    let scheduler = convert::build_scheduler(config, overrides)?;
    println!("{}", scheduler.dataset_for_day(args.index));
    Ok(())
}
