//! pagetheme - named color themes for a page's root style variables
//!
//! A theme is a fixed set of eight CSS custom property values. Applying a
//! theme writes all eight to a [`StyleContext`]; unknown theme names are
//! ignored.
//!
//! # Modules
//!
//! - [`theme`] - Theme ids, style variables, and the theme table
//! - [`style`] - The styling context seam and the in-memory [`StyleSheet`]
//! - [`apply`] - Theme application
//! - [`config`] - `.pagetheme.toml` rendering configuration
//! - [`debug`] - Debug-build file logging
//! - `web` - DOM-backed context and the `setTheme` export (feature `web`, wasm32 only)

pub mod apply;
pub mod config;
pub mod debug;
pub mod style;
pub mod theme;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

// Re-export commonly used types
pub use apply::{apply_definition, apply_theme};
pub use config::Config;
pub use style::{StyleContext, StyleSheet};
pub use theme::{StyleVar, ThemeDefinition, ThemeId, theme_definition};
