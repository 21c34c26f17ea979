use crate::parse::Timestamp;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    //-------------------------------------------------------------------------
    // Server
    //-------------------------------------------------------------------------
    #[error("server stopped at {at} without a matching start")]
    OrphanStop { at: Timestamp },

    #[error("server started at {at} while already running since {since}")]
    OverlappingStart { at: Timestamp, since: Timestamp },

    //-------------------------------------------------------------------------
    // Players
    //-------------------------------------------------------------------------
    #[error("player '{name}' left at {at} without a matching join")]
    OrphanLeave { name: String, at: Timestamp },

    #[error("player '{name}' joined at {at} while already online since {since}")]
    RepeatedJoin {
        name: String,
        at: Timestamp,
        since: Timestamp,
    },

    #[error("player '{name}' was still online since {since} when the server {boundary} at {at}")]
    StaleSession {
        name: String,
        since: Timestamp,
        at: Timestamp,
        boundary: &'static str,
    },

    //-------------------------------------------------------------------------
    // Ordering
    //-------------------------------------------------------------------------
    #[error("{interval} interval opened at {start} but closes earlier, at {end}")]
    OutOfOrder {
        interval: &'static str,
        start: Timestamp,
        end: Timestamp,
    },
}
