use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::TimerEngine;
use crate::errors::AppResult;
use crate::store::{EntryStore, audit, state};
use crate::ui::messages::{success, warning};
use crate::utils::time::format_hms;

/// Stop if running, persist the session as one entry, reset the timer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save { message } = cmd {
        let timer_path = Config::timer_file_for(&cfg.store);
        let audit_path = Config::audit_file_for(&cfg.store);
        let mut engine = TimerEngine::with_system_clock(state::load(&timer_path));

        engine.set_description(message.clone());

        match engine.save_and_reset() {
            Some(record) => {
                let short = record.short_id().to_string();
                let duration = record.duration;

                let mut store = EntryStore::load(&cfg.store_path());
                // A failed write must not kill the command: the entry
                // stays in memory and the failure goes to the log.
                if let Err(e) = store.add(record) {
                    warning(format!("Failed to persist entries: {e}"));
                    let _ = audit::append(&audit_path, "save", &short, "persist failed");
                } else {
                    let _ = audit::append(
                        &audit_path,
                        "save",
                        &short,
                        &format!("Saved session ({})", format_hms(duration)),
                    );
                    success(format!(
                        "Saved session {short} ({}). Timer reset.",
                        format_hms(duration)
                    ));
                }

                state::clear(&timer_path)?;
            }
            None => {
                // Sub-second sessions floor to zero as well; persist the
                // (possibly stopped) state so nothing is lost.
                state::store(&timer_path, engine.state())?;
                warning("Nothing to save: elapsed time is zero.");
            }
        }
    }
    Ok(())
}
