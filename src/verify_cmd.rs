//! Verify command: check the schedule's cycle guarantees.

use anyhow::{Context, Result, bail};
use tracing::info_span;

use crate::cli::{ScheduleArgs, VerifyArgs};
use crate::config::OrbisConfig;
use crate::{convert, output};

/// Print a verification report; fails if any cycle breaks a guarantee.
pub fn run(args: VerifyArgs, config: &OrbisConfig, overrides: &ScheduleArgs) -> Result<()> {
    let _cmd = info_span!("verify").entered();
    let scheduler = convert::build_scheduler(config, overrides)?;
    let report = scheduler
        .verify(args.start_cycle, args.cycles)
        .context("failed to verify schedule")?;
    output::emit(&report, None)?;
    if !report.is_ok() {
        bail!(
            "verification failed: {} incomplete cycle(s), {} repeated day(s)",
            report.incomplete_cycles.len(),
            report.repeat_days.len()
        );
    }
    Ok(())
}
