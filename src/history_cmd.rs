//! History and stats commands.

use anyhow::{Context, Result};
use tracing::info_span;

use crate::cli::{HistoryArgs, ScheduleArgs, StatsArgs};
use crate::config::OrbisConfig;
use crate::{convert, output};

/// Print or write the schedule over an inclusive day range.
pub fn run(args: HistoryArgs, config: &OrbisConfig, overrides: &ScheduleArgs) -> Result<()> {
    let _cmd = info_span!("history").entered();
    let scheduler = convert::build_scheduler(config, overrides)?;
    let history = scheduler
        .history(args.start, args.end)
        .context("failed to build history")?;
    output::emit(&history, args.output.as_deref())
}

/// Print rotation statistics for a day, the current one by default.
pub fn run_stats(args: StatsArgs, config: &OrbisConfig, overrides: &ScheduleArgs) -> Result<()> {
    let _cmd = info_span!("stats").entered();
    let scheduler = convert::build_scheduler(config, overrides)?;
    let day = match args.day {
        Some(day) => day,
        None => {
            let clock = convert::build_day_clock(&config.schedule, overrides)?;
            i64::from(clock.current_day_index())
        }
    };
    output::emit(&scheduler.stats(day), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbis_rotation::{AvailabilityTier, DatasetDescriptor};

    fn config() -> OrbisConfig {
        OrbisConfig {
            datasets: vec![
                DatasetDescriptor::new("gdp_per_capita", "economy", AvailabilityTier::High),
                DatasetDescriptor::new("forest_area", "environment", AvailabilityTier::Medium),
            ],
            ..OrbisConfig::default()
        }
    }

    #[test]
    fn unbounded_range_is_an_error() {
        let args = HistoryArgs {
            start: 0,
            end: i64::MAX,
            output: None,
        };
        let err = run(args, &config(), &ScheduleArgs::default()).unwrap_err();
        assert!(format!("{err:#}").contains("more than the limit"));
    }

    #[test]
    fn writes_history_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let args = HistoryArgs {
            start: -2,
            end: 5,
            output: Some(path.clone()),
        };
        run(args, &config(), &ScheduleArgs::default()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["total_days"], 8);
    }
}
