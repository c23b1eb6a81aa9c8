//! Daily and weekly projections over the entry store.
//!
//! Everything here is a pure read-only computation over the loaded
//! records, recomputed per invocation. No state of its own.

use crate::models::session::SessionRecord;
use crate::utils::date;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One calendar day of the daily log.
pub struct DayGroup<'a> {
    pub date: NaiveDate,
    pub entries: Vec<&'a SessionRecord>,
    pub total_secs: u64,
}

/// Aggregates over a trailing window of days, report fodder.
pub struct WeeklyStats {
    /// Per-day totals in seconds, oldest first, zero-filled.
    pub days: Vec<(NaiveDate, u64)>,
    pub total_secs: u64,
    /// Average over days that have entries, not over the whole window.
    pub avg_secs_per_active_day: u64,
    pub most_productive: Option<NaiveDate>,
    pub entry_count: usize,
}

/// Group records by their day key, most recent day first; entries
/// within a day run chronologically by start time.
pub fn group_by_date(entries: &[SessionRecord]) -> Vec<DayGroup<'_>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&SessionRecord>> = BTreeMap::new();

    for entry in entries {
        let Some(d) = date::parse_date(&entry.date) else {
            continue;
        };
        by_date.entry(d).or_default().push(entry);
    }

    by_date
        .into_iter()
        .rev()
        .map(|(d, mut day_entries)| {
            day_entries.sort_by_key(|e| e.start_time);
            let total_secs = total_secs(day_entries.iter().copied());
            DayGroup {
                date: d,
                entries: day_entries,
                total_secs,
            }
        })
        .collect()
}

pub fn total_secs<'a>(entries: impl Iterator<Item = &'a SessionRecord>) -> u64 {
    entries.map(|e| e.duration).sum()
}

/// Keep only records whose day key falls inside the inclusive bounds.
pub fn filter_by_bounds(
    entries: &[SessionRecord],
    bounds: (NaiveDate, NaiveDate),
) -> Vec<SessionRecord> {
    let (start, end) = bounds;
    entries
        .iter()
        .filter(|e| match date::parse_date(&e.date) {
            Some(d) => d >= start && d <= end,
            None => false,
        })
        .cloned()
        .collect()
}

/// Stats over the `window` days ending at `today`.
pub fn weekly_stats(entries: &[SessionRecord], today: NaiveDate, window: usize) -> WeeklyStats {
    let days = date::last_n_days(today, window);
    let mut daily: BTreeMap<NaiveDate, u64> = days.iter().map(|d| (*d, 0)).collect();
    let mut entry_count = 0usize;

    for entry in entries {
        let Some(d) = date::parse_date(&entry.date) else {
            continue;
        };
        if let Some(total) = daily.get_mut(&d) {
            *total += entry.duration;
            entry_count += 1;
        }
    }

    let total_secs: u64 = daily.values().sum();
    let active_days = daily.values().filter(|&&s| s > 0).count() as u64;
    let avg_secs_per_active_day = if active_days > 0 {
        total_secs / active_days
    } else {
        0
    };

    let most_productive = daily
        .iter()
        .filter(|&(_, &secs)| secs > 0)
        .max_by_key(|&(_, &secs)| secs)
        .map(|(d, _)| *d);

    WeeklyStats {
        days: days.into_iter().map(|d| (d, daily[&d])).collect(),
        total_secs,
        avg_secs_per_active_day,
        most_productive,
        entry_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_on(day: &str, start_hour: i64, duration: u64) -> SessionRecord {
        let d = date::parse_date(day).unwrap();
        let start_ms = d
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
            + start_hour * 3_600_000;
        let mut rec = SessionRecord::from_session(
            start_ms,
            start_ms + duration as i64 * 1000,
            duration,
            None,
        );
        // Pin the day key: these tests care about grouping, not the
        // local timezone of the machine running them.
        rec.date = day.to_string();
        rec
    }

    #[test]
    fn groups_most_recent_day_first_chronological_within() {
        let entries = vec![
            record_on("2026-02-15", 14, 600),
            record_on("2026-02-14", 9, 300),
            record_on("2026-02-15", 9, 900),
        ];

        let groups = group_by_date(&entries);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, date::parse_date("2026-02-15").unwrap());
        assert_eq!(groups[0].total_secs, 1500);
        // Within the day, earliest start first.
        assert!(groups[0].entries[0].start_time < groups[0].entries[1].start_time);
        assert_eq!(groups[1].total_secs, 300);
    }

    #[test]
    fn weekly_stats_totals_and_average() {
        let today = date::parse_date("2026-02-15").unwrap();
        let entries = vec![
            record_on("2026-02-15", 9, 2 * 3600),
            record_on("2026-02-14", 9, 3600),
            record_on("2026-02-14", 14, 3600),
            // Outside the window, must be ignored.
            record_on("2026-02-01", 9, 5 * 3600),
        ];

        let stats = weekly_stats(&entries, today, 7);
        assert_eq!(stats.days.len(), 7);
        assert_eq!(stats.total_secs, 4 * 3600);
        assert_eq!(stats.entry_count, 3);
        // Two active days: (2 + 2) / 2 hours.
        assert_eq!(stats.avg_secs_per_active_day, 2 * 3600);
        assert_eq!(stats.most_productive, date::parse_date("2026-02-14"));
    }

    #[test]
    fn weekly_stats_on_empty_store() {
        let today = date::parse_date("2026-02-15").unwrap();
        let stats = weekly_stats(&[], today, 7);
        assert_eq!(stats.total_secs, 0);
        assert_eq!(stats.avg_secs_per_active_day, 0);
        assert!(stats.most_productive.is_none());
        assert_eq!(stats.entry_count, 0);
    }

    #[test]
    fn filter_by_bounds_is_inclusive() {
        let entries = vec![
            record_on("2026-02-10", 9, 100),
            record_on("2026-02-15", 9, 200),
            record_on("2026-02-20", 9, 300),
        ];
        let bounds = (
            date::parse_date("2026-02-10").unwrap(),
            date::parse_date("2026-02-15").unwrap(),
        );
        let filtered = filter_by_bounds(&entries, bounds);
        assert_eq!(filtered.len(), 2);
    }
}
