//! Guess command: record a guess against today's challenge.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use orbis_calendar::DayClock;
use orbis_rotation::{
    FileProgressStore, PlayerProgress, PlayerProgressStore, RotationScheduler, load_or_reset,
};
use serde::Serialize;
use tracing::{info, info_span};

use crate::cli::{GuessArgs, ScheduleArgs};
use crate::config::OrbisConfig;
use crate::{convert, output};

/// Result of one guess.
#[derive(Debug, Serialize)]
pub struct GuessOutcome {
    pub day_index: u32,
    pub guess: String,
    pub correct: bool,
    pub solved: bool,
    pub attempts: usize,
}

/// Records `guess` for the challenge active at `at` and persists progress.
pub fn record<S: PlayerProgressStore + ?Sized>(
    clock: &DayClock,
    scheduler: &RotationScheduler,
    store: &mut S,
    guess: &str,
    at: DateTime<Utc>,
) -> Result<GuessOutcome> {
    let day_index = clock.day_index_at(at);
    let dataset_id = scheduler.dataset_for_day(i64::from(day_index));
    let mut progress: PlayerProgress = load_or_reset(store, i64::from(day_index), dataset_id)
        .context("failed to load player progress")?;
    let correct = progress.record_guess(guess);
    store.set(&progress).context("failed to save player progress")?;
    info!(day_index, correct, attempts = progress.guesses.len(), "guess recorded");
    Ok(GuessOutcome {
        day_index,
        guess: guess.to_string(),
        correct,
        solved: progress.solved,
        attempts: progress.guesses.len(),
    })
}

/// Record a guess for today's challenge in the progress file.
pub fn run(args: GuessArgs, config: &OrbisConfig, overrides: &ScheduleArgs) -> Result<()> {
    let _cmd = info_span!("guess").entered();
    let clock = convert::build_day_clock(&config.schedule, overrides)?;
    let scheduler = convert::build_scheduler(config, overrides)?;
    let mut store = FileProgressStore::new(&args.progress);
    let outcome = record(&clock, &scheduler, &mut store, &args.dataset_id, Utc::now())?;
    output::emit(&outcome, None)
}
