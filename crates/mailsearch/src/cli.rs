//! CLI command structure using clap

use clap::{Parser, Subcommand, ValueEnum};
use mailsearch_core::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mailsearch")]
#[command(version, about = "Search an Office 365 mailbox through read_emails.py", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: <config dir>/mailsearch/config.toml)
    #[arg(long, global = true, env = "MAILSEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to read_emails.py, checked before every other location
    #[arg(long, global = true, env = "MAILSEARCH_SCRIPT")]
    pub script: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search mail from a free-text request, e.g. `report body 20 full`
    Search {
        /// Search term plus optional modifiers: subject, body, a count,
        /// text/readable, full/complete. Everything after the first word
        /// is request text, even words that look like flags.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List recent inbox messages
    List {
        /// Number of messages (clamped to 1-50)
        #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
        count: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
    },

    /// Show how a request resolves without running anything
    Resolve {
        /// Output as JSON (must come before the request text)
        #[arg(long)]
        json: bool,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Show where read_emails.py is looked for and which one is used
    Locate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check environment health
    Doctor {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}
