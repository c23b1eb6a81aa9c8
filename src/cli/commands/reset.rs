use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::TimerEngine;
use crate::errors::AppResult;
use crate::store::state;
use crate::ui::messages::{info, success};
use crate::utils::time::format_hms;

/// Discard the unsaved session without persisting anything.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset = cmd {
        let timer_path = Config::timer_file_for(&cfg.store);
        let mut engine = TimerEngine::with_system_clock(state::load(&timer_path));

        let elapsed = engine.elapsed_secs();
        if engine.reset() {
            state::clear(&timer_path)?;
            success(format!(
                "Discarded unsaved session ({} elapsed).",
                format_hms(elapsed)
            ));
        } else {
            info("Timer already at zero.");
        }
    }
    Ok(())
}
