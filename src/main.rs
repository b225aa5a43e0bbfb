mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use pagetheme::config::{CONFIG_FILE_NAME, Config};
use pagetheme::debug;
use std::path::PathBuf;

fn main() -> Result<()> {
    debug::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Css { theme, format, selector } => {
            // Load configuration, then apply command-line overrides
            let mut config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            if let Some(format) = format {
                config.format = format.into();
            }
            if let Some(selector) = selector {
                config.selector = selector;
            }
            commands::run_css(&theme, &config)
        }
        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
            commands::run_init(&path, force)
        }
    }
}
