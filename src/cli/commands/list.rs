use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{self, DayGroup};
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::utils::date;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hms;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let store = EntryStore::load(&cfg.store_path());

        let entries = if *now {
            let today = date::today();
            summary::filter_by_bounds(store.entries(), (today, today))
        } else if let Some(p) = period {
            summary::filter_by_bounds(store.entries(), date::parse_range(p)?)
        } else {
            store.entries().to_vec()
        };

        if entries.is_empty() {
            println!("No time entries recorded yet.");
            return Ok(());
        }

        let overall = summary::total_secs(entries.iter());
        println!(
            "📋 Daily log: {} entries, total {}\n",
            entries.len(),
            format_hms(overall)
        );

        let today = date::today();
        for group in summary::group_by_date(&entries) {
            print_day(&group, today);
        }
    }
    Ok(())
}

fn print_day(group: &DayGroup<'_>, today: chrono::NaiveDate) {
    println!(
        "{}   {}",
        bold(&format!(
            "{} ({})",
            date::relative_label(group.date, today),
            group.date
        )),
        format_hms(group.total_secs)
    );

    let mut table = Table::new(vec![
        Column {
            header: "ID".into(),
            width: 8,
        },
        Column {
            header: "START".into(),
            width: 5,
        },
        Column {
            header: "END".into(),
            width: 5,
        },
        Column {
            header: "DURATION".into(),
            width: 8,
        },
        Column {
            header: "DESCRIPTION".into(),
            width: 30,
        },
    ]);

    for entry in &group.entries {
        table.add_row(vec![
            entry.short_id().to_string(),
            date::clock_of_ms(entry.start_time),
            date::clock_of_ms(entry.end_time),
            format_hms(entry.duration),
            entry.description.clone().unwrap_or_default(),
        ]);
    }

    println!("{}", table.render());
}
