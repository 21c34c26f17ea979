//! Session reconstruction.
//!
//! The reconstructor folds the ordered event stream into an [`EngineState`]:
//! server uptime, server-wide idle time and per-player sessions. Every
//! interval is credited exactly once, at the instant it closes. The
//! finalizer then extrapolates whatever is still open to a reference
//! instant, producing a read-only [`Snapshot`] without touching the state.

mod error;
mod finalize;
mod policy;
mod reconstruct;
mod snapshot;
mod state;
#[cfg(test)]
mod tests;

pub use error::SessionError;
pub use finalize::finalize;
pub use policy::OrphanPolicy;
pub use reconstruct::SessionReconstructor;
pub use snapshot::{PlayerSnapshot, ServerSnapshot, Snapshot};
pub use state::{EngineState, PlayerState, ServerState};

/// Tracing target of the session narration.
pub const TRACE_TARGET: &str = "mcstats::session";
