use crate::models::day_type::DayType;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for hhreg
/// CLI application to log work hours with SQLite
#[derive(Parser)]
#[command(
    name = "hhreg",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log daily work hours and report monthly balances against your expected workday",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(long = "database", help = "Show the database file location")]
        database: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(
            long = "check",
            help = "Check database integrity and unpaired time entries"
        )]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create or correct day entries
    Entry {
        #[command(subcommand)]
        action: EntryCommands,
    },

    /// Show reports
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
}

#[derive(Subcommand)]
pub enum EntryCommands {
    /// Log a day: creates it if missing, then appends the given times
    New(EntryArgs),

    /// Replace an existing day (type, justification and all times)
    Override(EntryArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EntryArgs {
    /// Sets entry day as today
    #[arg(short = 't', long = "today", conflicts_with = "day")]
    pub today: bool,

    /// Sets day type
    #[arg(
        short = 'y',
        long = "day-type",
        value_enum,
        ignore_case = true,
        default_value_t = DayType::Work
    )]
    pub day_type: DayType,

    /// Defines a justification
    #[arg(short = 'j', long = "justification")]
    pub justification: Option<String>,

    /// Defines the day (YYYY-MM-DD)
    #[arg(short = 'd', long = "day")]
    pub day: Option<String>,

    /// Time entries (format: HH:MM), alternating in/out
    #[arg(value_name = "ENTRIES")]
    pub entries: Vec<String>,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show entries and balance for a given month
    Month {
        /// Month to report (YYYY-MM or MM/YYYY)
        month: String,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },
}
