//! Time utilities: parsing HH:MM, formatting elapsed seconds, etc.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_required_time(input: &str) -> AppResult<NaiveTime> {
    parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

pub fn secs_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_seconds()
}

/// Format whole seconds as HH:MM:SS. Hours widen past two digits for
/// totals over 99 hours instead of wrapping.
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Floor-truncate a millisecond delta to whole seconds. Negative deltas
/// (clock skew) count as zero.
pub fn ms_to_secs(delta_ms: i64) -> u64 {
    (delta_ms.max(0) / 1000) as u64
}
