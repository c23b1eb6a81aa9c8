use crate::models::session::SessionRecord;
use crate::utils::{date, time};
use serde::Serialize;

/// Flat row shape shared by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub id: String,
    pub date: String,
    pub start: String, // local HH:MM
    pub end: String,   // local HH:MM
    pub duration_secs: u64,
    pub duration: String, // HH:MM:SS
    pub description: String,
}

impl From<&SessionRecord> for SessionExport {
    fn from(rec: &SessionRecord) -> Self {
        Self {
            id: rec.id.clone(),
            date: rec.date.clone(),
            start: date::clock_of_ms(rec.start_time),
            end: date::clock_of_ms(rec.end_time),
            duration_secs: rec.duration,
            duration: time::format_hms(rec.duration),
            description: rec.description.clone().unwrap_or_default(),
        }
    }
}
