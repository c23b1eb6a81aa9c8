use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Local, NaiveDate, TimeZone};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Local-time calendar day key (YYYY-MM-DD) for an epoch-millisecond
/// timestamp. This is what groups entries into days.
pub fn day_key(ms: i64) -> String {
    date_of_ms(ms).format("%Y-%m-%d").to_string()
}

pub fn date_of_ms(ms: i64) -> NaiveDate {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .unwrap_or_else(Local::now)
        .date_naive()
}

/// Local wall-clock HH:MM for an epoch-millisecond timestamp.
pub fn clock_of_ms(ms: i64) -> String {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .unwrap_or_else(Local::now)
        .format("%H:%M")
        .to_string()
}

/// The `n` calendar days ending at `end` inclusive, oldest first.
pub fn last_n_days(end: NaiveDate, n: usize) -> Vec<NaiveDate> {
    let mut out = Vec::with_capacity(n);
    let mut d = end - chrono::Days::new(n.saturating_sub(1) as u64);
    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }
    out
}

pub fn weekday_short(d: NaiveDate) -> String {
    d.format("%a").to_string()
}

/// "Today", "Yesterday", or the full date ("Monday, February 15, 2026").
pub fn relative_label(d: NaiveDate, today: NaiveDate) -> String {
    if d == today {
        "Today".to_string()
    } else if Some(d) == today.pred_opt() {
        "Yesterday".to_string()
    } else {
        d.format("%A, %B %-d, %Y").to_string()
    }
}

/// Parse a period expression into inclusive date bounds.
///
/// Supported forms:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - start:end ranges of the three forms above (same granularity)
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(
                "start and end must have the same format".into(),
            ));
        }

        let (s, _) = parse_single_period(start)?;
        let (_, e) = parse_single_period(end)?;
        if e < s {
            return Err(AppError::InvalidRange(format!("end before start: {r}")));
        }
        Ok((s, e))
    } else {
        parse_single_period(r)
    }
}

fn parse_single_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidRange(format!("invalid year: {p}")))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year: {p}")))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year: {p}")))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidRange(format!("invalid month: {p}")))?;
            let last = NaiveDate::from_ymd_opt(first.year(), first.month(), 1)
                .and_then(|d| d.checked_add_months(chrono::Months::new(1)))
                .and_then(|d| d.pred_opt())
                .ok_or_else(|| AppError::InvalidRange(format!("invalid month: {p}")))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!(
            "unsupported period format: {p}"
        ))),
    }
}
