mod cli;
mod commands;
mod context;

use clap::Parser;
use cli::{Cli, Commands};
use context::ContextArgs;
use mailsearch_core::config::consts;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let args = ContextArgs {
        config: cli.config,
        script: cli.script,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Search { text } => commands::search::run(text, args),
        Commands::List { count, format } => commands::list::run(count, format.into(), args),
        Commands::Resolve { text, json } => commands::resolve::run(text, json),
        Commands::Locate { json } => commands::locate::run(json, args),
        Commands::Doctor { json } => commands::doctor::run(json, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `MAILSEARCH_LOG` sets the filter, `--verbose` forces debug
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().filter_or(consts::env::LOG, "warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
