//! Css command implementation

use anyhow::{Context, Result};
use pagetheme::config::{Config, OutputFormat};
use pagetheme::{StyleSheet, apply_theme};

/// Print the custom properties `theme` sets, as configured.
///
/// Unknown themes set nothing, so nothing is printed.
pub fn run_css(theme: &str, config: &Config) -> Result<()> {
    let output = render(theme, config)?;
    print!("{output}");
    Ok(())
}

/// Apply `theme` to an empty sheet and render it
pub(crate) fn render(theme: &str, config: &Config) -> Result<String> {
    let mut sheet = StyleSheet::new();
    apply_theme(&mut sheet, theme);

    if sheet.is_empty() {
        return Ok(String::new());
    }

    match config.format {
        OutputFormat::Css => Ok(sheet.render_css(&config.selector, config.indent)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&sheet)
                .context("Failed to serialize style properties")?;
            Ok(format!("{json}\n"))
        }
    }
}
