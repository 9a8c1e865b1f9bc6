//! quickparse - CLI for chat exports, forms, local train passes and PNR status

mod cli;
mod commands;
mod config;
mod input;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use commands::chat::ChatArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config first so the log level can come from the file
    let config = config::load_config(&cli)?;
    init_logging(config.verbose);
    tracing::debug!(?config, "configuration loaded");

    match &cli.command {
        Command::Chat {
            input,
            line,
            stats,
            sentiment,
            sender,
        } => commands::chat::run(
            &config,
            ChatArgs {
                input: input.as_deref(),
                line: line.as_deref(),
                stats: *stats,
                sentiment: *sentiment,
                sender: sender.as_deref(),
            },
        ),

        Command::Form { input } => commands::form::run(&config, input.as_deref()),

        Command::Pass { input } => commands::pass::run(&config, input.as_deref()),

        Command::Pnr { input } => commands::pnr::run(&config, input.as_deref()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
