use crate::core::summary::filter_by_bounds;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::SessionExport;
use crate::export::notify_export_success;
use crate::models::session::SessionRecord;
use crate::store::EntryStore;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_range;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the saved sessions.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a period expression
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `start:end`)
    pub fn export(
        store: &EntryStore,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let selected: Vec<SessionRecord> = match range {
            None => store.entries().to_vec(),
            Some(r) if r.eq_ignore_ascii_case("all") => store.entries().to_vec(),
            Some(r) => filter_by_bounds(store.entries(), parse_range(r)?),
        };

        if selected.is_empty() {
            warning("No entries found for the selected range. Nothing to export.");
            return Ok(());
        }

        let rows: Vec<SessionExport> = selected.iter().map(SessionExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

/// JSON export, pretty-printed.
fn export_json(rows: &[SessionExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV export (header included via serde).
fn export_csv(rows: &[SessionExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
