use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{EntryStore, audit};
use crate::ui::messages::{info, success, warning};
use std::io::{Write, stdin, stdout};

/// Delete all entries, with a confirmation prompt unless `--yes`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut store = EntryStore::load(&cfg.store_path());

        if store.is_empty() {
            info("The store is already empty.");
            return Ok(());
        }

        if !*yes {
            warning(format!(
                "This deletes all {} entries. Continue? [y/N]:",
                store.len()
            ));

            let mut answer = String::new();
            print!("> ");
            stdout().flush().ok();
            stdin().read_line(&mut answer)?;

            let answer = answer.trim().to_lowercase();
            if !(answer == "y" || answer == "yes") {
                info("Clear cancelled.");
                return Ok(());
            }
        }

        let audit_path = Config::audit_file_for(&cfg.store);
        match store.clear() {
            Ok(removed) => {
                let _ = audit::append(
                    &audit_path,
                    "clear",
                    "",
                    &format!("Cleared {removed} entries"),
                );
                success(format!("Cleared {removed} entries."));
            }
            Err(e) => {
                warning(format!("Failed to persist entries: {e}"));
                let _ = audit::append(&audit_path, "clear", "", "persist failed");
            }
        }
    }
    Ok(())
}
