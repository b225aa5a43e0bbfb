//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use pagetheme::config::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagetheme")]
#[command(author, version, about = "Render a page color theme as root CSS custom properties")]
pub struct Cli {
    /// Configuration file (default: .pagetheme.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the custom properties a theme sets
    Css {
        /// Theme id: pink, aqua, forest, dark
        theme: String,
        /// Output format (overrides the configuration file)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
        /// Rule selector (overrides the configuration file)
        #[arg(short, long)]
        selector: Option<String>,
    },
    /// Write a default configuration file
    Init {
        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Css,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Css => OutputFormat::Css,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
