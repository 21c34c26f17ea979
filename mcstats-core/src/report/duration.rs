use chrono::TimeDelta;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// `1h 02m 03s`, or `2d 01h 02m 03s` once a day has passed. Negative
/// deltas render as zero.
pub fn format_duration(delta: TimeDelta) -> String {
    let total = delta.num_seconds().max(0);

    let days = total / DAY;
    let hours = (total % DAY) / HOUR;
    let minutes = (total % HOUR) / MINUTE;
    let seconds = total % MINUTE;

    if days > 0 {
        format!("{days}d {hours:02}h {minutes:02}m {seconds:02}s")
    } else {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    }
}
