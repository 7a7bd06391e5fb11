/*!
 * `H:MM:SS` timecode helpers.
 *
 * All wall-clock values in the persisted artifacts (timeline offsets,
 * estimated runtime) are zero-padded `H:MM:SS` strings, e.g. `"0:05:00"`.
 * Hours carry no padding; minutes and seconds are always two digits.
 */

/// Format a duration in minutes as an `H:MM:SS` string.
///
/// Fractional minutes are rounded to the nearest whole second, so
/// `2.5` renders as `"0:02:30"`. Negative inputs clamp to zero.
pub fn format_minutes(minutes: f64) -> String {
    let total_seconds = (minutes * 60.0).round().max(0.0) as u64;
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}:{:02}", hours, mins, secs)
}

/// Parse an `H:MM:SS` string back into minutes.
///
/// Returns `None` for anything that is not three colon-separated
/// non-negative integer fields. Callers in the validation core treat a
/// `None` as a data anomaly to report, never as a fault to propagate.
pub fn parse_timecode(value: &str) -> Option<f64> {
    let mut parts = value.split(':');
    let hours: u64 = parts.next()?.trim().parse().ok()?;
    let minutes: u64 = parts.next()?.trim().parse().ok()?;
    let seconds: u64 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return None;
    }
    let total_seconds = hours * 3600 + minutes * 60 + seconds;
    Some(total_seconds as f64 / 60.0)
}
