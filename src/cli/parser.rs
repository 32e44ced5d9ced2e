use clap::{Parser, Subcommand};

/// Command-line interface definition for rIdleReport
/// CLI application that posts a daily per-shift idle time report to a webhook
#[derive(Parser)]
#[command(
    name = "ridlereport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily idle time report: per-shift driver statistics from an activity CSV, posted to a chat webhook",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple sites)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
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

    /// Build the daily idle time report and send it
    Report {
        /// Day to report on (YYYY-MM-DD); defaults to yesterday
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Activity CSV to read instead of the configured source file
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Print the messages instead of posting them
        #[arg(long = "dry-run")]
        dry_run: bool,
    },
}
