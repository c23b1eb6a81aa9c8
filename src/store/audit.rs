use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// One line of the append-only operation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub at: String, // ISO 8601 timestamp
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an operation to the audit log (JSON lines). Callers treat
/// failures as non-fatal: the log is diagnostics, not data.
pub fn append(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = AuditEntry {
        at: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    let line = serde_json::to_string(&entry)?;
    writeln!(file, "{line}")?;
    Ok(())
}

/// Read the whole audit log. Malformed lines are skipped; a truncated
/// tail after a hard shutdown must not hide the rest of the log.
pub fn read_all(path: &Path) -> Vec<AuditEntry> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };

    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn temp_log(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{name}_timetrack_audit.log"));
        fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn append_then_read_preserves_order() {
        let path = temp_log("order");
        append(&path, "save", "abc", "saved session").unwrap();
        append(&path, "del", "abc", "deleted entry").unwrap();

        let entries = read_all(&path);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "save");
        assert_eq!(entries[1].operation, "del");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let path = temp_log("malformed");
        append(&path, "save", "abc", "ok").unwrap();
        let mut file = fs::OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "{{truncated").unwrap();
        append(&path, "clear", "", "ok too").unwrap();

        let entries = read_all(&path);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn missing_log_reads_empty() {
        assert!(read_all(&temp_log("missing")).is_empty());
    }
}
