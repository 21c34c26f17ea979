use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do with events that do not fit the session model: a stop
/// without a start, a leave without a join, a start while already running,
/// sessions left open across a server restart, or an interval that would
/// close before it opened.
///
/// Either way no negative or invented duration is ever credited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Skip the unmatched part of the accounting and log a warning.
    #[default]
    Ignore,
    /// Abort the run at the first anomaly.
    Fail,
}
