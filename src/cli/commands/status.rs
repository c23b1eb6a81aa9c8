use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::TimerEngine;
use crate::errors::AppResult;
use crate::store::state;
use crate::utils::colors::{RESET, color_for_phase};
use crate::utils::date;
use crate::utils::time::format_hms;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Show the timer phase and elapsed time; optionally keep redrawing.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { watch, interval_ms } = cmd {
        let timer_path = Config::timer_file_for(&cfg.store);

        if *watch {
            let interval = (*interval_ms).unwrap_or(cfg.watch_interval_ms).max(10);
            watch_loop(&timer_path, interval);
        } else {
            print_status(&timer_path);
        }
    }
    Ok(())
}

fn print_status(timer_path: &Path) {
    let engine = TimerEngine::with_system_clock(state::load(timer_path));
    let phase = engine.state().phase;

    println!(
        "⏱  {}{}{}  {}",
        color_for_phase(phase.is_running()),
        phase.as_str(),
        RESET,
        format_hms(engine.elapsed_secs())
    );

    if let Some(session_start) = engine.state().session_started_at {
        println!(
            "   session started {} {}",
            date::day_key(session_start),
            date::clock_of_ms(session_start)
        );
    }
    if let Some(desc) = engine.description() {
        println!("   {desc}");
    }
}

/// Redraw the elapsed line until the timer leaves Running. Correctness
/// never depends on the cadence: every tick recomputes the elapsed time
/// from the wall-clock anchors. Re-reading the checkpoint each tick
/// means a stop/reset/save from another terminal ends the loop, so no
/// polling outlives the Running state.
fn watch_loop(timer_path: &Path, interval_ms: u64) {
    loop {
        let engine = TimerEngine::with_system_clock(state::load(timer_path));
        let running = engine.is_running();

        print!(
            "\r⏱  {}{}{}  {}   ",
            color_for_phase(running),
            engine.state().phase.as_str(),
            RESET,
            format_hms(engine.elapsed_secs())
        );
        std::io::stdout().flush().ok();

        if !running {
            println!();
            break;
        }

        std::thread::sleep(Duration::from_millis(interval_ms));
    }
}
