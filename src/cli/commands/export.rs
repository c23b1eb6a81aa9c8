use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::{EntryStore, audit};
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = EntryStore::load(&cfg.store_path());
        ExportLogic::export(&store, format, file, range, *force)?;

        let audit_path = Config::audit_file_for(&cfg.store);
        if let Err(e) = audit::append(
            &audit_path,
            "export",
            file,
            &format!("Exported entries as {}", format.as_str()),
        ) {
            warning(format!("Failed to write audit log: {}", e));
        }
    }
    Ok(())
}
