use chrono::NaiveDate;

/// Replay position of a log file.
///
/// Dated keys hold the numeric components of the file name
/// (year, month, day and an optional sequence number) and compare
/// lexicographically as integers, so `2024-1-2-1` sorts before `2024-1-10-1`
/// regardless of zero padding. The undated current file sorts after every
/// dated file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderKey {
    Dated(Vec<u32>),
    Current,
}

/// Parses a rotated log name stem such as `2024-01-31-2` into its order key
/// and calendar date.
///
/// Returns `None` unless every dash-separated component is an integer, there
/// are at least three of them, and the first three form a valid date.
pub fn parse_dated_name(stem: &str) -> Option<(OrderKey, NaiveDate)> {
    let parts = stem
        .split('-')
        .map(|part| part.parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;

    let [year, month, day, ..] = parts[..] else {
        return None;
    };

    let year = i32::try_from(year).ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    Some((OrderKey::Dated(parts), date))
}
