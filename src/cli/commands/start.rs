use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::TimerEngine;
use crate::errors::AppResult;
use crate::store::state;
use crate::ui::messages::{success, warning};
use crate::utils::time::format_hms;

/// Start or resume the timer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { message } = cmd {
        let timer_path = Config::timer_file_for(&cfg.store);
        let mut engine = TimerEngine::with_system_clock(state::load(&timer_path));

        let description = message.clone().or_else(|| cfg.default_description.clone());

        if engine.start(description) {
            state::store(&timer_path, engine.state())?;
            if engine.elapsed_secs() > 0 {
                success(format!(
                    "Timer resumed at {}.",
                    format_hms(engine.elapsed_secs())
                ));
            } else {
                success("Timer started.");
            }
        } else {
            warning(format!(
                "Timer is already running ({} elapsed).",
                format_hms(engine.elapsed_secs())
            ));
        }
    }
    Ok(())
}
