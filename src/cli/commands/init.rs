use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty entries store
pub fn handle(cli: &Cli) -> AppResult<()> {
    let store_path = if let Some(custom) = &cli.store {
        Config::init_all(Some(custom.clone()), cli.test)?
    } else {
        Config::init_all(None, cli.test)?
    };

    let path = Config::config_file();

    println!("⚙️  Initializing timetrack…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Entries     : {}", store_path.display());

    // Audit entry is best-effort, never blocking.
    let audit_path = Config::audit_file_for(&store_path.to_string_lossy());
    if let Err(e) = audit::append(
        &audit_path,
        "init",
        &store_path.to_string_lossy(),
        "Store initialized",
    ) {
        warning(format!("Failed to write audit log: {}", e));
    }

    println!("🎉 timetrack initialization completed!");
    Ok(())
}
