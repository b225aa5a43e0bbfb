//! Browser host for theme application.
//!
//! [`DocumentRootStyle`] writes through to the inline style of
//! `document.documentElement`, and `setTheme` is exported to JavaScript.

use crate::apply::apply_theme;
use crate::debug;
use crate::style::StyleContext;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CssStyleDeclaration, HtmlElement};

/// Styling context backed by the document root element.
pub struct DocumentRootStyle {
    style: CssStyleDeclaration,
}

impl DocumentRootStyle {
    /// Resolve the root element of the current window's document.
    ///
    /// Returns `None` outside a browser page.
    pub fn from_window() -> Option<Self> {
        let root = web_sys::window()?.document()?.document_element()?;
        let root: HtmlElement = root.dyn_into().ok()?;
        Some(Self {
            style: root.style(),
        })
    }

    /// Write to an arbitrary element's inline style instead of the root.
    pub fn from_style(style: CssStyleDeclaration) -> Self {
        Self { style }
    }
}

impl StyleContext for DocumentRootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        if let Err(err) = self.style.set_property(name, value) {
            debug::log_category("WEB", &format!("setProperty({name}) rejected: {err:?}"));
        }
    }
}

/// Apply a theme to the current page. Unknown names and pages without a
/// document are ignored.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(theme: &str) {
    if let Some(mut root) = DocumentRootStyle::from_window() {
        apply_theme(&mut root, theme);
    }
}
