use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod engine;
mod knowledge;
mod logging;
mod math;
mod models;
mod personality;
mod utils;

use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config)?;
    if let Some(data_file) = cli.data_file {
        config = config.with_data_file(data_file);
    }

    let _log_guard = match logging::init(&config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Chat(commands::chat::Args::default()));

    match command {
        Commands::Chat(args) => commands::chat::execute(args, config).await,
        Commands::Calc(args) => commands::calc::execute(args).await,
        Commands::History(args) => commands::history::execute(args, config).await,
        Commands::Knowledge(args) => commands::knowledge::execute(args, config).await,
    }
}
