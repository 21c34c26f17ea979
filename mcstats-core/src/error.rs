use crate::conf::ConfigError;
use crate::sequence::SequenceError;
use crate::session::SessionError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level failure of a statistics run.
///
/// Every variant is fatal: a run either replays the whole log history or
/// produces nothing, since partial statistics would be silently wrong.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error("while replaying {path}: {source}")]
    Session {
        path: PathBuf,
        #[source]
        source: SessionError,
    },
}

impl StatsError {
    pub fn session(path: impl Into<PathBuf>, source: SessionError) -> Self {
        Self::Session {
            path: path.into(),
            source,
        }
    }
}
