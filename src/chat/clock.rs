//! Minute-of-day helpers for message timestamps

use chrono::{NaiveTime, Timelike};

/// Last minute of a day (23:59)
pub const LAST_MINUTE: u16 = 24 * 60 - 1;

/// Minute of the day for a wall-clock time
pub fn minute_of(time: NaiveTime) -> u16 {
    (time.hour() * 60 + time.minute()) as u16
}

/// Format a minute of the day as 12-hour `H:MM AM|PM`
pub fn format_minute(minute: u16) -> String {
    let minute = minute.min(LAST_MINUTE) as u32;
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| "12:00 AM".to_string())
}

/// Parse a 12-hour display time back into a minute of the day
///
/// Returns `None` when the string is not a `H:MM AM|PM` time.
pub fn minutes_of_day(display: &str) -> Option<u16> {
    NaiveTime::parse_from_str(display.trim(), "%I:%M %p")
        .ok()
        .map(minute_of)
}

/// Minute assigned to the line at `index` out of `line_count` lines
///
/// The baseline sits `line_count` minutes before `now`, clamped at midnight so the
/// sequence never wraps into the previous day; it is also capped at 23:59.
pub fn minute_for_line(now: NaiveTime, line_count: usize, index: usize) -> u16 {
    let baseline = (minute_of(now) as usize).saturating_sub(line_count);
    (baseline + index).min(LAST_MINUTE as usize) as u16
}
