use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionRecord;
use crate::store::{EntryStore, audit};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::{parse_required_time, secs_between};
use chrono::TimeZone;

/// Record a past session manually (no timer involved).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        start,
        end,
        message,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d =
            date::parse_date(date_arg).ok_or_else(|| AppError::InvalidDate(date_arg.clone()))?;

        //
        // 2. Parse start/end times
        //
        let start_time = parse_required_time(start)?;
        let end_time = parse_required_time(end)?;

        let duration = secs_between(start_time, end_time);
        if duration <= 0 {
            return Err(AppError::InvalidInterval(format!("{start} → {end}")));
        }

        //
        // 3. Resolve local epoch timestamps
        //
        let start_ms = local_ms(d, start_time)?;
        let end_ms = local_ms(d, end_time)?;

        let record =
            SessionRecord::from_session(start_ms, end_ms, duration as u64, message.clone());
        let short = record.short_id().to_string();

        //
        // 4. Persist
        //
        let mut store = EntryStore::load(&cfg.store_path());
        let audit_path = Config::audit_file_for(&cfg.store);
        if let Err(e) = store.add(record) {
            warning(format!("Failed to persist entries: {e}"));
            let _ = audit::append(&audit_path, "add", &short, "persist failed");
        } else {
            let _ = audit::append(
                &audit_path,
                "add",
                &short,
                &format!("Added entry on {date_arg} ({start} → {end})"),
            );
            success(format!(
                "Added entry {short} on {date_arg}: {start} → {end}."
            ));
        }
    }
    Ok(())
}

fn local_ms(d: chrono::NaiveDate, t: chrono::NaiveTime) -> AppResult<i64> {
    chrono::Local
        .from_local_datetime(&d.and_time(t))
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| AppError::InvalidDate(format!("{d} {t} has no local representation")))
}
