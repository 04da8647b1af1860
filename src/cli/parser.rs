use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSkillTracker
/// CLI application to track hours spent practicing skills with SQLite
#[derive(Parser)]
#[command(
    name = "rskilltracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track hours spent practicing skills: totals, edits and a bar-chart history, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Discard all existing history before running the command
    #[arg(global = true, long = "fresh")]
    pub fresh: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Log hours for a skill today (merged into today's record if present)
    Add {
        /// Skill name, e.g. Piano
        skill: String,

        /// Hours spent: 1.5, 90m or 1h30m
        hours: String,
    },

    /// Show total hours and last practice date per skill
    Summary,

    /// List every (skill, date, hours) record
    List,

    /// Overwrite the hours of an existing record
    Edit {
        /// Skill name of the record
        skill: String,

        /// Date of the record (YYYY-MM-DD, today or yesterday)
        date: String,

        /// New amount of hours: 1.5, 90m or 1h30m
        hours: String,
    },

    /// Show the practice history as a bar chart, one panel per skill
    History {
        #[arg(long, short, help = "Only show this skill")]
        skill: Option<String>,

        #[arg(long, help = "Bar width in characters (overrides chart_width)")]
        width: Option<usize>,

        #[arg(long, help = "Disable colors")]
        plain: bool,
    },

    /// Print the configured skill list
    Skills,

    /// Delete all logged hours
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export summary or history data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export per-skill totals instead of per-day history")]
        summary: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Store the copy in a .zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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
    },

    /// Manage the database (integrity checks, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
