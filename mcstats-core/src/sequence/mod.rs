//! Log file discovery and replay order.
//!
//! A server writes one rotated file per calendar day
//! (`YYYY-MM-DD-<seq>.log`, usually gzipped once rotated) plus one undated
//! file that is still being written to. Replaying the files in the order
//! produced here reproduces the true chronological order of the events they
//! contain; nothing downstream re-sorts.

mod discover;
mod error;
mod order;
mod reader;
#[cfg(test)]
mod tests;

pub use discover::{LogFileRef, discover_logs};
pub use error::SequenceError;
pub use order::{OrderKey, parse_dated_name};
pub use reader::{LogLines, open_lines};

/// Suffix marking a gzip-compressed log.
pub const GZIP_SUFFIX: &str = ".gz";

/// Suffix of every log file, compressed or not, once `.gz` is stripped.
pub const LOG_SUFFIX: &str = ".log";

/// Default name of the undated, still-growing log.
pub const DEFAULT_CURRENT_FILE: &str = "latest.log";
