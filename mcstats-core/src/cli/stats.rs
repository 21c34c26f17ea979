use crate::conf::StatsConfig;
use crate::parse::Timestamp;
use crate::pipeline::collect_snapshot;
use crate::report::{ReportFormat, default_report_format, render};
use chrono::{Local, NaiveDateTime, SubsecRound};

const NOW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn stats(
    config: &StatsConfig,
    format: Option<ReportFormat>,
    now: Option<Timestamp>,
) -> anyhow::Result<()> {
    let now = now.unwrap_or_else(local_now);
    let format = format.unwrap_or_else(default_report_format);

    let snapshot = collect_snapshot(config, now)?;
    let out = render(&snapshot, format)?;
    println!("{}", out.trim_end());

    Ok(())
}

/// Value parser for `--now`.
pub fn parse_now(value: &str) -> Result<Timestamp, String> {
    NaiveDateTime::parse_from_str(value, NOW_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM:SS: {e}"))
}

/// Log timestamps are local wall-clock time at second resolution.
pub fn local_now() -> Timestamp {
    Local::now().naive_local().trunc_subsecs(0)
}
