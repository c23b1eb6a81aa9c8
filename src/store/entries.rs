use crate::errors::AppResult;
use crate::models::session::SessionRecord;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

/// The persistence-backed ordered collection of session records.
///
/// One JSON slot, rewritten wholesale on every mutation. Order is most
/// recent first: `add` inserts at the head. Loading never fails: a
/// missing or unreadable slot yields an empty collection.
pub struct EntryStore {
    path: PathBuf,
    entries: Vec<SessionRecord>,
}

pub enum IdMatch {
    None,
    One(String),
    Ambiguous,
}

impl EntryStore {
    pub fn load(path: &Path) -> Self {
        let entries = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Vec<SessionRecord>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    // Fail-soft: a corrupt slot starts an empty history.
                    warning(format!(
                        "Entries store {} is not valid JSON ({e}); starting empty.",
                        path.display()
                    ));
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[SessionRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at the head (most recent first) and persist. The record is
    /// part of the in-memory collection even when persisting fails.
    pub fn add(&mut self, record: SessionRecord) -> AppResult<()> {
        self.entries.insert(0, record);
        self.persist()
    }

    /// Remove the entry with the given id, if any. Idempotent: an
    /// unknown id is not an error. Returns whether an entry was removed.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Empty the collection. Returns the number of removed entries.
    pub fn clear(&mut self) -> AppResult<usize> {
        let removed = self.entries.len();
        self.entries.clear();
        self.persist()?;
        Ok(removed)
    }

    /// Resolve a full id or a unique id prefix typed on the CLI.
    pub fn resolve_id(&self, prefix: &str) -> IdMatch {
        if prefix.is_empty() {
            return IdMatch::None;
        }
        let mut matches = self.entries.iter().filter(|e| e.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (None, _) => IdMatch::None,
            (Some(e), None) => IdMatch::One(e.id.clone()),
            (Some(_), Some(_)) => IdMatch::Ambiguous,
        }
    }

    // Full-document overwrite via temp-file-then-rename, so a write that
    // dies midway leaves the previous slot intact.
    fn persist(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_store(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{name}_timetrack_entries.json"));
        fs::remove_file(&path).ok();
        path
    }

    fn record(start_ms: i64, duration: u64, desc: &str) -> SessionRecord {
        SessionRecord::from_session(
            start_ms,
            start_ms + duration as i64 * 1000,
            duration,
            Some(desc.to_string()),
        )
    }

    #[test]
    fn load_on_missing_slot_is_empty() {
        let path = temp_store("missing");
        let store = EntryStore::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn load_on_corrupt_slot_is_empty() {
        let path = temp_store("corrupt");
        fs::write(&path, "{not json]").unwrap();
        let store = EntryStore::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn add_inserts_at_head_and_round_trips() {
        let path = temp_store("roundtrip");
        let mut store = EntryStore::load(&path);
        let first = record(1_000, 5, "first");
        let second = record(10_000, 3, "second");
        store.add(first.clone()).unwrap();
        store.add(second.clone()).unwrap();

        // Most recent first in memory...
        assert_eq!(store.entries()[0].id, second.id);
        assert_eq!(store.entries()[1].id, first.id);

        // ...and identical after a fresh load.
        let reloaded = EntryStore::load(&path);
        assert_eq!(reloaded.entries(), store.entries());
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let path = temp_store("delete");
        let mut store = EntryStore::load(&path);
        let a = record(1_000, 1, "a");
        let b = record(2_000, 2, "b");
        let c = record(3_000, 3, "c");
        store.add(a.clone()).unwrap();
        store.add(b.clone()).unwrap();
        store.add(c.clone()).unwrap();

        assert!(store.delete(&b.id).unwrap());
        let ids: Vec<&str> = store.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec![c.id.as_str(), a.id.as_str()]);

        // Idempotent: deleting again changes nothing.
        assert!(!store.delete(&b.id).unwrap());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_then_fresh_load_is_empty() {
        let path = temp_store("clear");
        let mut store = EntryStore::load(&path);
        store.add(record(1_000, 1, "a")).unwrap();
        store.add(record(2_000, 2, "b")).unwrap();
        assert_eq!(store.clear().unwrap(), 2);

        let reloaded = EntryStore::load(&path);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn resolve_id_handles_prefixes() {
        let path = temp_store("resolve");
        let mut store = EntryStore::load(&path);
        let a = record(1_000, 1, "a");
        store.add(a.clone()).unwrap();

        match store.resolve_id(&a.id[..8]) {
            IdMatch::One(id) => assert_eq!(id, a.id),
            _ => panic!("expected a unique match"),
        }
        assert!(matches!(store.resolve_id("zzzz"), IdMatch::None));
        assert!(matches!(store.resolve_id(""), IdMatch::None));
    }
}
