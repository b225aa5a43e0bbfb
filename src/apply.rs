//! Theme application
//!
//! Looks a theme up by id and writes its eight style variables to a
//! [`StyleContext`]. Unknown ids are ignored: nothing is written and no
//! error is returned.

use crate::debug;
use crate::style::StyleContext;
use crate::theme::{ThemeDefinition, ThemeId, theme_definition};

/// Apply the theme named `theme` to `ctx`.
///
/// A recognized id overwrites all eight variables; anything else leaves
/// `ctx` untouched.
pub fn apply_theme<C: StyleContext + ?Sized>(ctx: &mut C, theme: &str) {
    match theme.parse::<ThemeId>() {
        Ok(id) => {
            apply_definition(ctx, theme_definition(id));
            debug::log_theme(theme, true);
        }
        Err(()) => debug::log_theme(theme, false),
    }
}

/// Write every variable of `definition` to `ctx`, in table order.
pub fn apply_definition<C: StyleContext + ?Sized>(ctx: &mut C, definition: &ThemeDefinition) {
    for (var, value) in definition.values() {
        ctx.set_property(var.css_name(), value);
    }
}
