use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static pattern");
    re.replace_all(s, "").into_owned()
}

/// Color per operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" | "add" => Colour::Green,
        "del" | "clear" => Colour::Red,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Print the audit log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            return Ok(());
        }

        let audit_path = Config::audit_file_for(&cfg.store);
        let entries = audit::read_all(&audit_path);

        if entries.is_empty() {
            println!("The audit log is empty.");
            return Ok(());
        }

        // Column widths from the data, capped so one long target can't
        // blow up the layout.
        let op_w = entries
            .iter()
            .map(|e| op_target(e).len())
            .max()
            .unwrap_or(10)
            .min(60);
        let date_w = entries.iter().map(|e| e.at.len()).max().unwrap_or(0);

        println!("📜 Audit log:\n");

        for entry in &entries {
            let color = color_for_operation(&entry.operation);
            let colored = color.paint(&entry.operation).to_string();
            let rest = if entry.target.is_empty() {
                colored
            } else {
                format!("{} ({})", colored, entry.target)
            };

            let visible = strip_ansi(&rest);
            let truncated = if visible.len() > 60 {
                let mut s = visible.chars().take(57).collect::<String>();
                s.push_str("...");
                // truncation drops the coloring; padding stays correct
                s
            } else {
                rest
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&truncated).len()));

            println!(
                "{:<date_w$} | {}{} => {}",
                entry.at,
                truncated,
                padding,
                entry.message,
                date_w = date_w
            );
        }
    }
    Ok(())
}

fn op_target(entry: &audit::AuditEntry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}
