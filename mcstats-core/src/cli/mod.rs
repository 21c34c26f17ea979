mod files;
mod stats;


pub use files::*;
pub use stats::*;

use crate::conf::StatsConfig;
use crate::parse::Timestamp;
use crate::report::ReportFormat;
use crate::session::OrphanPolicy;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay the log directory and print a statistics snapshot
    Stats {
        /// Log directory (overrides `log_dir` from the config file)
        dir: Option<PathBuf>,

        /// Report format [default: pretty on a terminal, plain otherwise]
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Evaluate open sessions at this local time (YYYY-MM-DDTHH:MM:SS)
        #[arg(long, value_parser = parse_now)]
        now: Option<Timestamp>,

        /// How to treat unmatched stops, leaves and restarts
        #[arg(long, value_enum)]
        orphans: Option<OrphanPolicy>,

        /// Name of the undated log still being written
        #[arg(long)]
        current_file: Option<String>,
    },

    /// List the log files in replay order
    Files {
        /// Log directory (overrides `log_dir` from the config file)
        dir: Option<PathBuf>,

        /// Name of the undated log still being written
        #[arg(long)]
        current_file: Option<String>,
    },
}

impl Command {
    /// Layers command line flags over the loaded config.
    pub fn apply_overrides(&self, mut config: StatsConfig) -> StatsConfig {
        let (dir, current_file) = match self {
            Command::Stats {
                dir,
                orphans,
                current_file,
                ..
            } => {
                if let Some(policy) = orphans {
                    config.orphan_policy = *policy;
                }
                (dir, current_file)
            }
            Command::Files { dir, current_file } => (dir, current_file),
        };

        if let Some(dir) = dir {
            config.log_dir = dir.clone();
        }
        if let Some(name) = current_file {
            config.current_file = name.clone();
        }

        config
    }

    pub fn run(self, config: &StatsConfig) -> anyhow::Result<()> {
        match self {
            Command::Stats { format, now, .. } => stats(config, format, now),
            Command::Files { .. } => files(config),
        }
    }
}
