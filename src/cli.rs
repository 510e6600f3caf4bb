use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// Orbis daily dataset rotation.
#[derive(Parser)]
#[command(
    name = "orbis",
    version,
    about = "Deterministic daily dataset rotation for the Orbis globe game"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = "orbis.toml")]
    pub config: PathBuf,

    /// Schedule overrides applied on top of the config file.
    #[command(flatten)]
    pub overrides: ScheduleArgs,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Overrides for schedule parameters. Each falls back to its environment
/// variable, then to the config file, then to the built-in default.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ScheduleArgs {
    /// UTC hour (0-23) at which the daily challenge resets.
    #[arg(long, global = true, env = "ORBIS_RESET_HOUR_UTC")]
    pub reset_hour: Option<u8>,

    /// Days after which the day index wraps to 0.
    #[arg(long, global = true, env = "ORBIS_CYCLE_LENGTH_DAYS")]
    pub cycle_length: Option<u32>,

    /// Base seed for every cycle shuffle.
    #[arg(long, global = true, env = "ORBIS_RANDOM_SEED")]
    pub seed: Option<String>,

    /// Target share of days drawn from the featured set.
    #[arg(long, global = true, env = "ORBIS_FEATURED_FRACTION")]
    pub featured_fraction: Option<f64>,

    /// Enable or disable featured weighting (true/false).
    #[arg(long, global = true, env = "ORBIS_WEIGHTING_ENABLED")]
    pub weighting: Option<bool>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show today's challenge.
    Today(TodayArgs),
    /// Print the dataset scheduled for a day index.
    Day(DayArgs),
    /// Print the schedule over a day range.
    History(HistoryArgs),
    /// Print rotation statistics.
    Stats(StatsArgs),
    /// Check cycle coverage and repeat-freedom.
    Verify(VerifyArgs),
    /// Guess today's dataset.
    Guess(GuessArgs),
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Resolve the challenge at this RFC 3339 instant instead of now.
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Day index to resolve.
    #[arg(allow_hyphen_values = true)]
    pub index: i64,
}

/// Arguments for the `history` subcommand.
#[derive(clap::Args)]
pub struct HistoryArgs {
    /// First day index (inclusive).
    #[arg(long, allow_hyphen_values = true)]
    pub start: i64,

    /// Last day index (inclusive).
    #[arg(long, allow_hyphen_values = true)]
    pub end: i64,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `stats` subcommand.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Day index to report from. Defaults to the current day.
    #[arg(long, allow_hyphen_values = true)]
    pub day: Option<i64>,
}

/// Arguments for the `verify` subcommand.
#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Number of consecutive cycles to check.
    #[arg(long, default_value_t = 10)]
    pub cycles: usize,

    /// First cycle to check.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub start_cycle: i64,
}

/// Arguments for the `guess` subcommand.
#[derive(clap::Args)]
pub struct GuessArgs {
    /// Dataset id being guessed.
    pub dataset_id: String,

    /// Progress file for the current player.
    #[arg(long, default_value = "orbis-progress.json")]
    pub progress: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_overrides_and_subcommand() {
        let cli = Cli::try_parse_from([
            "orbis",
            "--seed",
            "alt",
            "--weighting",
            "false",
            "history",
            "--start",
            "-3",
            "--end",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.overrides.seed.as_deref(), Some("alt"));
        assert_eq!(cli.overrides.weighting, Some(false));
        match cli.command {
            Command::History(args) => {
                assert_eq!(args.start, -3);
                assert_eq!(args.end, 10);
                assert!(args.output.is_none());
            }
            _ => panic!("expected history"),
        }
    }

    #[test]
    fn parses_today_instant() {
        let cli = Cli::try_parse_from(["orbis", "today", "--at", "2024-01-01T12:30:00Z"]).unwrap();
        match cli.command {
            Command::Today(args) => assert!(args.at.is_some()),
            _ => panic!("expected today"),
        }
    }
}
