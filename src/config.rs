//! Configuration file support for pagetheme
//!
//! Handles `.pagetheme.toml` configuration file loading and saving.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = ".pagetheme.toml";

/// Output format for rendered themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A single CSS rule block
    #[default]
    Css,
    /// A JSON object of property name to value
    Json,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Selector the rendered rule is scoped to
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Spaces before each declaration in CSS output
    #[serde(default = "default_indent")]
    pub indent: u8,

    /// Output format: "css" or "json"
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            indent: default_indent(),
            format: OutputFormat::default(),
        }
    }
}

fn default_selector() -> String {
    ":root".to_string()
}

fn default_indent() -> u8 {
    4
}

impl Config {
    /// Load configuration file (returns default if not found)
    ///
    /// Searches for `.pagetheme.toml` in the current directory.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from(CONFIG_FILE_NAME);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from specified path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to specified path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default(path: &Path) -> Result<()> {
        let config = Config::default();
        config.save_to(path)
    }
}
