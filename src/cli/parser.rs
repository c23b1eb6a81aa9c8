use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timetrack
/// Stopwatch-style CLI to track work sessions in a local JSON store
#[derive(Parser)]
#[command(
    name = "timetrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A stopwatch for work sessions: start/stop/save a timer, keep a daily log, get weekly reports",
    long_about = None
)]
pub struct Cli {
    /// Override entries store path (useful for tests or a custom store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the entries store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start (or resume) the timer
    Start {
        /// Describe what you are working on
        #[arg(short = 'm', long = "message")]
        message: Option<String>,
    },

    /// Pause the running timer; the session keeps accumulating on the next start
    Stop,

    /// Show the timer phase and elapsed time
    Status {
        #[arg(long = "watch", help = "Redraw the elapsed time until the timer stops")]
        watch: bool,

        #[arg(
            long = "interval-ms",
            help = "Redraw interval in milliseconds (default from config, 100)"
        )]
        interval_ms: Option<u64>,
    },

    /// Discard the unsaved session without persisting it
    Reset,

    /// Stop if running, persist the session as one entry, and reset the timer
    Save {
        /// Description stored with the entry (overrides the one given at start)
        #[arg(short = 'm', long = "message")]
        message: Option<String>,
    },

    /// Record a past session manually
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        /// Session start (HH:MM)
        #[arg(long = "in")]
        start: String,

        /// Session end (HH:MM)
        #[arg(long = "out")]
        end: String,

        /// Description stored with the entry
        #[arg(short = 'm', long = "message")]
        message: Option<String>,
    },

    /// Show the daily log of saved entries
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end)"
        )]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's entries")]
        now: bool,
    },

    /// Delete one entry by id (or unique id prefix)
    Del {
        /// Entry id as shown by `list`
        id: String,
    },

    /// Delete all entries
    Clear {
        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Weekly report: hours per day plus productivity stats
    Report {
        #[arg(long, help = "Window size in days (default 7)")]
        days: Option<usize>,
    },

    /// Export saved entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the entries store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print the audit log entries")]
        print: bool,
    },
}
