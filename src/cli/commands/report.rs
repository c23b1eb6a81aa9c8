use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary;
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::utils::colors::{CYAN, RESET, colorize_duration};
use crate::utils::date;
use crate::utils::formatting::{bold, hours_short, pad_left};
use crate::utils::time::format_hms;

const BAR_WIDTH: usize = 30;

/// Weekly report: an hours-per-day bar chart plus productivity stats.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { days } = cmd {
        let window = (*days).unwrap_or(7).clamp(1, 92);
        let store = EntryStore::load(&cfg.store_path());
        let stats = summary::weekly_stats(store.entries(), date::today(), window);

        println!("{}\n", bold(&format!("📊 Report, last {window} days")));

        let max_secs = stats.days.iter().map(|(_, s)| *s).max().unwrap_or(0);
        for (day, secs) in &stats.days {
            print_bar(*day, *secs, max_secs, cfg.hours_precision);
        }

        println!();
        print_stat("Total hours", &hours_short(stats.total_secs, cfg.hours_precision));
        print_stat(
            "Average daily hours",
            &hours_short(stats.avg_secs_per_active_day, cfg.hours_precision),
        );
        print_stat(
            "Most productive day",
            &stats
                .most_productive
                .map(date::weekday_short)
                .unwrap_or_else(|| "N/A".to_string()),
        );
        print_stat("Entries", &stats.entry_count.to_string());
        print_stat("Total time", &format_hms(stats.total_secs));
    }
    Ok(())
}

fn print_bar(day: chrono::NaiveDate, secs: u64, max_secs: u64, precision: usize) {
    let filled = if max_secs == 0 {
        0
    } else {
        // Round so a nonzero day always shows at least one block.
        ((secs as f64 / max_secs as f64) * BAR_WIDTH as f64).round().max(if secs > 0 { 1.0 } else { 0.0 }) as usize
    };

    let mut bar = String::new();
    bar.push_str(CYAN);
    for _ in 0..filled {
        bar.push('█');
    }
    bar.push_str(RESET);
    for _ in filled..BAR_WIDTH {
        bar.push('·');
    }

    let label = format!("{} {}", date::weekday_short(day), day.format("%m-%d"));
    let value = hours_short(secs, precision);
    println!("  {label}  {bar}  {}", colorize_duration(&value, secs));
}

fn print_stat(label: &str, value: &str) {
    println!("  {}  {}", pad_left(label, 20), bold(value));
}
