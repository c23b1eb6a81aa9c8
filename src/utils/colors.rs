/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Phase color: running → green, idle → grey.
pub fn color_for_phase(running: bool) -> &'static str {
    if running { GREEN } else { GREY }
}

/// Grey out zero durations so padded-out days don't shout.
pub fn colorize_duration(value: &str, secs: u64) -> String {
    if secs == 0 {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
