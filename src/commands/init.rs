//! Init command implementation

use anyhow::{Result, bail};
use pagetheme::Config;
use std::path::Path;

/// Write a default configuration file to `path`
pub fn run_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::generate_default(path)?;
    pagetheme::debug_log!("[INIT] wrote {}", path.display());
    println!("✅ Created configuration: {}", path.display());
    Ok(())
}
