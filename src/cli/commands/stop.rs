use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::TimerEngine;
use crate::errors::AppResult;
use crate::store::state;
use crate::ui::messages::{success, warning};
use crate::utils::time::format_hms;

/// Pause the running timer. The session anchor survives, so a later
/// `start` keeps accumulating into the same session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop = cmd {
        let timer_path = Config::timer_file_for(&cfg.store);
        let mut engine = TimerEngine::with_system_clock(state::load(&timer_path));

        if engine.stop() {
            state::store(&timer_path, engine.state())?;
            success(format!(
                "Timer paused at {}. `save` persists it, `start` resumes.",
                format_hms(engine.elapsed_secs())
            ));
        } else {
            warning("Timer is not running.");
        }
    }
    Ok(())
}
