use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{EntryStore, IdMatch, audit};
use crate::ui::messages::{info, success, warning};

/// Delete one entry by id or unique id prefix. Deleting an unknown id
/// is a notice, not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut store = EntryStore::load(&cfg.store_path());
        let audit_path = Config::audit_file_for(&cfg.store);

        let full_id = match store.resolve_id(id) {
            IdMatch::One(full) => full,
            IdMatch::None => {
                info(format!("No entry matches '{id}'; nothing deleted."));
                return Ok(());
            }
            IdMatch::Ambiguous => {
                return Err(AppError::AmbiguousEntry(id.clone()));
            }
        };

        if let Err(e) = store.delete(&full_id) {
            warning(format!("Failed to persist entries: {e}"));
            let _ = audit::append(&audit_path, "del", &full_id, "persist failed");
        } else {
            let _ = audit::append(&audit_path, "del", &full_id, "Deleted entry");
            success(format!("Deleted entry {}.", &full_id[..8.min(full_id.len())]));
        }
    }
    Ok(())
}
