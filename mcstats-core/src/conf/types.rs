use crate::sequence::DEFAULT_CURRENT_FILE;
use crate::session::OrphanPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings of one statistics run.
///
/// ```toml
/// log_dir = "/srv/minecraft/logs"
/// current_file = "latest.log"
/// orphan_policy = "ignore"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsConfig {
    /// Directory holding the daily logs. Relative paths in a config file are
    /// resolved against the file's own directory.
    pub log_dir: PathBuf,

    /// Name of the undated, still-growing log.
    pub current_file: String,

    /// How unmatched starts, stops, joins and leaves are treated.
    pub orphan_policy: OrphanPolicy,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            current_file: DEFAULT_CURRENT_FILE.to_string(),
            orphan_policy: OrphanPolicy::default(),
        }
    }
}
