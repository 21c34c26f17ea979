//! Line lexing and event classification.
//!
//! Each raw line is split into its timestamp and body, and the body is then
//! matched against the known message shapes:
//!
//! `lex_line` -> `(Timestamp, body)` -> `classify` -> `Event`

mod classify;
mod lexer;
mod types;

pub use classify::{DEATH_VERBS, classify};
pub use lexer::lex_line;
pub use types::{Event, EventKind, Timestamp};
