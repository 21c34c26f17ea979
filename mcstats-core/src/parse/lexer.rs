use crate::parse::Timestamp;
use chrono::{NaiveDate, NaiveTime};

/// Length of the leading `[HH:MM:SS]` stamp.
const STAMP_LEN: usize = 10;

/// Splits a raw log line into its timestamp and message body.
///
/// A line qualifies only when it starts with a bracketed `HH:MM:SS` stamp,
/// a single space, and a second bracketed tag. The body starts at that
/// second tag. Anything else (banners, stack traces, continuation lines of
/// multi-line messages) yields `None`.
pub fn lex_line(line: &str, anchor: NaiveDate) -> Option<(Timestamp, &str)> {
    let time = line
        .get(..STAMP_LEN)?
        .strip_prefix('[')?
        .strip_suffix(']')?;

    let body = line.get(STAMP_LEN..)?.strip_prefix(' ')?;
    if !body.starts_with('[') || !body.contains(']') {
        return None;
    }

    if !is_clock_shape(time) {
        return None;
    }
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S").ok()?;

    Some((anchor.and_time(time), body))
}

// Exactly `DD:DD:DD`; chrono alone would accept single-digit fields.
fn is_clock_shape(time: &str) -> bool {
    let bytes = time.as_bytes();
    bytes.len() == 8
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}
