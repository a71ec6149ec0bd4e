use crate::core::export::ExportFormat;
use crate::models::Preset;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI and HTTP service to record time-sheet log entries in a JSON file
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small time-sheet log store: record work logs from the CLI or over HTTP/JSON",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a custom store)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data file
    Init {
        /// Built-in field set to write into the configuration
        #[arg(long, value_enum, default_value = "timesheet")]
        preset: Preset,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for problems")]
        check: bool,

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

    /// Run the HTTP/JSON API
    Serve {
        /// Listen address (HOST:PORT), overrides `bind` from the configuration
        #[arg(long)]
        bind: Option<String>,

        /// Listen port, keeps the configured host
        #[arg(long, env = "PORT")]
        port: Option<u16>,

        /// Keep records in process memory only
        #[arg(long)]
        memory: bool,
    },

    /// Create a log entry
    Add {
        /// Field values, e.g. user=alice timeIn=09:00 hubstaffTime=8
        #[arg(required = true, value_name = "FIELD=VALUE")]
        fields: Vec<String>,
    },

    /// List all log entries
    List {
        /// Print the records as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print one log entry as JSON
    Show {
        id: u64,
    },

    /// Update fields of an existing log entry
    Edit {
        id: u64,

        /// Field values to change; an empty value resets an optional field
        #[arg(required = true, value_name = "FIELD=VALUE")]
        fields: Vec<String>,
    },

    /// Delete a log entry
    Del {
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export all log entries
    Export {
        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Absolute path of the output file
        #[arg(long)]
        file: String,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },

    /// Copy the data file, optionally as a zip archive
    Backup {
        #[arg(long)]
        file: String,

        #[arg(long)]
        compress: bool,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}
