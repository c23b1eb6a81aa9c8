use crate::utils::date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed, immutable work interval as it lives in the entry store.
///
/// Field names serialize in camelCase so the persisted document matches
/// the store format of earlier releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub start_time: i64, // epoch milliseconds
    pub end_time: i64,   // epoch milliseconds, >= start_time
    pub duration: u64,   // whole seconds, captured from the timer at save time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: String, // local-time day key, YYYY-MM-DD
}

impl SessionRecord {
    /// Build a record for a finished session. Assigns a fresh UUID and
    /// derives the day key from the session start in local time.
    pub fn from_session(
        start_time: i64,
        end_time: i64,
        duration: u64,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_time,
            end_time,
            duration,
            description,
            date: date::day_key(start_time),
        }
    }

    /// First 8 characters of the id, enough to address an entry from the CLI.
    pub fn short_id(&self) -> &str {
        let cut = self.id.len().min(8);
        &self.id[..cut]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_session_assigns_unique_ids() {
        let a = SessionRecord::from_session(0, 5_000, 5, None);
        let b = SessionRecord::from_session(0, 5_000, 5, None);
        assert_ne!(a.id, b.id);
        assert_eq!(a.duration, 5);
    }

    #[test]
    fn serializes_in_camel_case() {
        let rec = SessionRecord::from_session(1_000, 4_000, 3, Some("review".into()));
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"startTime\""));
        assert!(json.contains("\"endTime\""));
        assert!(json.contains("\"description\""));
    }

    #[test]
    fn description_is_omitted_when_absent() {
        let rec = SessionRecord::from_session(1_000, 4_000, 3, None);
        let json = serde_json::to_string(&rec).unwrap();
        assert!(!json.contains("description"));
    }
}
