mod cli;
mod config;
mod convert;
mod guess_cmd;
mod history_cmd;
mod logging;
mod output;
mod today_cmd;
mod verify_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::OrbisConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = OrbisConfig::load(&cli.config)?;
    let overrides = &cli.overrides;
    match cli.command {
        Command::Today(args) => today_cmd::run(args, &config, overrides),
        Command::Day(args) => today_cmd::run_day(args, &config, overrides),
        Command::History(args) => history_cmd::run(args, &config, overrides),
        Command::Stats(args) => history_cmd::run_stats(args, &config, overrides),
        Command::Verify(args) => verify_cmd::run(args, &config, overrides),
        Command::Guess(args) => guess_cmd::run(args, &config, overrides),
    }
}
