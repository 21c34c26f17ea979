//! Snapshot rendering.
//!
//! The reporter only formats. It never looks at logs or state, so the same
//! snapshot always renders to the same text.

mod duration;
mod structured;
mod text;


pub use duration::format_duration;
pub use structured::{render_json, render_yaml};
pub use text::{render_plain, render_pretty};

use crate::session::Snapshot;
use clap::ValueEnum;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Plain,
    Pretty,
    Json,
    Yaml,
}

/// Coloured output on a terminal, plain text when piped.
pub fn default_report_format() -> ReportFormat {
    if std::io::stdout().is_terminal() {
        ReportFormat::Pretty
    } else {
        ReportFormat::Plain
    }
}

pub fn render(snapshot: &Snapshot, format: ReportFormat) -> anyhow::Result<String> {
    let out = match format {
        ReportFormat::Plain => render_plain(snapshot),
        ReportFormat::Pretty => render_pretty(snapshot),
        ReportFormat::Json => render_json(snapshot)?,
        ReportFormat::Yaml => render_yaml(snapshot)?,
    };
    Ok(out)
}
