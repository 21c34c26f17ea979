use crate::sequence::order::{OrderKey, parse_dated_name};
use crate::sequence::{GZIP_SUFFIX, LOG_SUFFIX, SequenceError};
use chrono::{DateTime, Local, NaiveDate};
use glob::{Pattern, glob};
use std::fs;
use std::path::{Path, PathBuf};

/// A log file selected for replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileRef {
    pub path: PathBuf,
    /// Read through a gzip decoder when set.
    pub compressed: bool,
    /// Calendar date combined with each line's time of day.
    pub anchor: NaiveDate,
    pub key: OrderKey,
}

/// Discovers the log files of `root` in replay order.
///
/// Rotated files (`YYYY-MM-DD-<seq>.log[.gz]`) are anchored to the date in
/// their name. The undated `current_file` (plain or `.gz`) always comes last
/// and is anchored to its creation time, falling back to its modification
/// time where creation time is unavailable. That anchor is a best-effort
/// approximation of the day the file covers.
///
/// Rotated files sharing an order key (a plain and a `.gz` copy, or the same
/// date with different zero padding) are replayed once, plain copy first.
///
/// # Errors
///
/// Fails when `root` is not a readable directory or when metadata of the
/// current file cannot be read.
pub fn discover_logs(root: &Path, current_file: &str) -> Result<Vec<LogFileRef>, SequenceError> {
    if !root.is_dir() {
        return Err(SequenceError::LogDir {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut current: Option<LogFileRef> = None;

    let candidates = discover(root, "*.log")?
        .into_iter()
        .chain(discover(root, "*.log.gz")?);

    for path in candidates {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::debug!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };

        let (plain_name, compressed) = match name.strip_suffix(GZIP_SUFFIX) {
            Some(stripped) => (stripped, true),
            None => (name, false),
        };

        if plain_name == current_file {
            // Prefer the uncompressed copy: it is the one still being written.
            match &current {
                Some(existing) if !existing.compressed => {
                    tracing::warn!(path = %path.display(), "ignoring duplicate current log");
                }
                _ => {
                    let anchor = creation_date(&path)?;
                    current = Some(LogFileRef {
                        path,
                        compressed,
                        anchor,
                        key: OrderKey::Current,
                    });
                }
            }
            continue;
        }

        let Some((key, anchor)) = plain_name
            .strip_suffix(LOG_SUFFIX)
            .and_then(parse_dated_name)
        else {
            tracing::debug!(path = %path.display(), "skipping file without a date stamp");
            continue;
        };

        files.push(LogFileRef {
            path,
            compressed,
            anchor,
            key,
        });
    }

    files.extend(current);
    files.sort_by(|a, b| {
        a.key
            .cmp(&b.key)
            .then_with(|| a.compressed.cmp(&b.compressed))
            .then_with(|| a.path.cmp(&b.path))
    });

    // One file per key: a day replayed twice would credit every interval twice.
    files.dedup_by(|duplicate, kept| {
        let same = duplicate.key == kept.key;
        if same {
            tracing::warn!(
                path = %duplicate.path.display(),
                kept = %kept.path.display(),
                "ignoring duplicate copy of a rotated log"
            );
        }
        same
    });

    Ok(files)
}

/// Lists regular files directly inside `root` matching `pattern`.
fn discover(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, SequenceError> {
    let pattern = resolve_glob(root, pattern);
    let entries = glob(&pattern).map_err(|source| SequenceError::Glob {
        pattern: pattern.clone(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SequenceError::ReadDir {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            paths.push(path);
        }
    }

    Ok(paths)
}

/// Joins `pattern` onto `root`, escaping any glob syntax in the directory
/// itself.
pub(crate) fn resolve_glob(root: &Path, pattern: &str) -> String {
    let root = Pattern::escape(&root.to_string_lossy());
    Path::new(&root).join(pattern).to_string_lossy().into_owned()
}

fn creation_date(path: &Path) -> Result<NaiveDate, SequenceError> {
    let metadata = fs::metadata(path).map_err(|source| SequenceError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;

    let time = metadata
        .created()
        .or_else(|_| metadata.modified())
        .map_err(|source| SequenceError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(DateTime::<Local>::from(time).date_naive())
}
