//! Theme table for pagetheme
//!
//! Each theme is a fixed record of eight CSS custom property values.
//! Themes: Pink, Aqua, Forest, Dark.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

// ==================== ThemeId Enum ====================

/// Theme identifier for type-safe theme selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Pink,
    Aqua,
    Forest,
    Dark,
}

impl ThemeId {
    /// Get the ID string for this theme (as accepted by `apply_theme`)
    pub fn id(&self) -> &'static str {
        match self {
            ThemeId::Pink => "pink",
            ThemeId::Aqua => "aqua",
            ThemeId::Forest => "forest",
            ThemeId::Dark => "dark",
        }
    }

    #[cfg(test)]
    pub(crate) const ALL: [ThemeId; 4] =
        [ThemeId::Pink, ThemeId::Aqua, ThemeId::Forest, ThemeId::Dark];
}

/// Exact, case-sensitive match on the theme id.
impl FromStr for ThemeId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pink" => Ok(ThemeId::Pink),
            "aqua" => Ok(ThemeId::Aqua),
            "forest" => Ok(ThemeId::Forest),
            "dark" => Ok(ThemeId::Dark),
            _ => Err(()),
        }
    }
}

impl Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ==================== StyleVar Enum ====================

/// One of the eight root style variables every theme writes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleVar {
    BgGradient,
    TextColor,
    LogoBg,
    LogoColor,
    NavbarBg,
    NavbarBorder,
    NavlinkColor,
    NavlinkHover,
}

impl StyleVar {
    /// CSS custom property name, including the leading `--`
    pub fn css_name(self) -> &'static str {
        match self {
            Self::BgGradient => "--bg-gradient",
            Self::TextColor => "--text-color",
            Self::LogoBg => "--logo-bg",
            Self::LogoColor => "--logo-color",
            Self::NavbarBg => "--navbar-bg",
            Self::NavbarBorder => "--navbar-border",
            Self::NavlinkColor => "--navlink-color",
            Self::NavlinkHover => "--navlink-hover",
        }
    }

    /// All variables in application order
    pub const ALL: [StyleVar; 8] = [
        Self::BgGradient,
        Self::TextColor,
        Self::LogoBg,
        Self::LogoColor,
        Self::NavbarBg,
        Self::NavbarBorder,
        Self::NavlinkColor,
        Self::NavlinkHover,
    ];
}

impl Display for StyleVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

// ==================== ThemeDefinition Struct ====================

/// Complete theme definition.
///
/// Values are opaque CSS color or gradient strings; they are written as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeDefinition {
    /// Theme identifier
    pub id: ThemeId,
    /// Page background gradient
    pub bg_gradient: &'static str,
    /// Body text color
    pub text_color: &'static str,
    pub logo_bg: &'static str,
    pub logo_color: &'static str,
    pub navbar_bg: &'static str,
    pub navbar_border: &'static str,
    pub navlink_color: &'static str,
    /// Nav link color on hover
    pub navlink_hover: &'static str,
}

impl ThemeDefinition {
    /// Value for a single style variable
    pub fn value(&self, var: StyleVar) -> &'static str {
        match var {
            StyleVar::BgGradient => self.bg_gradient,
            StyleVar::TextColor => self.text_color,
            StyleVar::LogoBg => self.logo_bg,
            StyleVar::LogoColor => self.logo_color,
            StyleVar::NavbarBg => self.navbar_bg,
            StyleVar::NavbarBorder => self.navbar_border,
            StyleVar::NavlinkColor => self.navlink_color,
            StyleVar::NavlinkHover => self.navlink_hover,
        }
    }

    /// All eight `(variable, value)` pairs in application order
    pub fn values(&self) -> [(StyleVar, &'static str); 8] {
        StyleVar::ALL.map(|var| (var, self.value(var)))
    }
}

// ==================== Theme Definitions ====================

pub const PINK: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Pink,
    bg_gradient: "linear-gradient(25deg, #ee628e 0%, #fde0e0 50%, #ec6590 100%)",
    text_color: "#333333",
    logo_bg: "#e77a9c",
    logo_color: "#091833",
    navbar_bg: "rgba(0, 0, 0, 0.5)",
    navbar_border: "#fff",
    navlink_color: "black",
    navlink_hover: "#e77a9c",
};

pub const AQUA: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Aqua,
    bg_gradient: "linear-gradient(25deg,rgb(63, 99, 156) 0%, #c2e9fb 50%,rgb(31, 100, 211) 100%)",
    text_color: "#0f1b2a",
    logo_bg: "#4facfe",
    logo_color: "#ffffff",
    navbar_bg: "rgba(79, 172, 254, 0.4)",
    navbar_border: "#4facfe",
    navlink_color: "#0f1b2a",
    navlink_hover: "#0077b6",
};

pub const FOREST: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Forest,
    bg_gradient: "linear-gradient(25deg, #556270, #4ECDC4, #556270)",
    text_color: "#f1f8e9",
    logo_bg: "#2e7d32",
    logo_color: "#ffffff",
    navbar_bg: "rgba(46, 125, 50, 0.4)",
    navbar_border: "#81c784",
    navlink_color: "#f1f8e9",
    navlink_hover: "#aed581",
};

pub const DARK: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Dark,
    bg_gradient: "linear-gradient(25deg, #2f2f2f,rgb(116, 132, 139), #4f4f4f)",
    text_color: "#f0f0f0",
    logo_bg: "#3f3f3f",
    logo_color: "#e0e0e0",
    navbar_bg: "rgba(50, 50, 50, 0.7)",
    navbar_border: "#6f6f6f",
    navlink_color: "#c0c0c0",
    navlink_hover: "#e8e8e8",
};

/// Get the ThemeDefinition for a given ThemeId
pub fn theme_definition(id: ThemeId) -> &'static ThemeDefinition {
    match id {
        ThemeId::Pink => &PINK,
        ThemeId::Aqua => &AQUA,
        ThemeId::Forest => &FOREST,
        ThemeId::Dark => &DARK,
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_id_parse() {
        assert_eq!("pink".parse::<ThemeId>().unwrap(), ThemeId::Pink);
        assert_eq!("aqua".parse::<ThemeId>().unwrap(), ThemeId::Aqua);
        assert_eq!("forest".parse::<ThemeId>().unwrap(), ThemeId::Forest);
        assert_eq!("dark".parse::<ThemeId>().unwrap(), ThemeId::Dark);
    }

    #[test]
    fn test_theme_id_parse_is_exact() {
        assert!("Pink".parse::<ThemeId>().is_err());
        assert!("DARK".parse::<ThemeId>().is_err());
        assert!(" forest".parse::<ThemeId>().is_err());
        assert!("neon".parse::<ThemeId>().is_err());
        assert!("".parse::<ThemeId>().is_err());
    }

    #[test]
    fn test_theme_id_display() {
        assert_eq!(ThemeId::Pink.to_string(), "pink");
        assert_eq!(ThemeId::Aqua.to_string(), "aqua");
        assert_eq!(ThemeId::Forest.to_string(), "forest");
        assert_eq!(ThemeId::Dark.to_string(), "dark");
    }

    #[test]
    fn test_theme_id_serde() {
        let json = serde_json::to_string(&ThemeId::Forest).unwrap();
        assert_eq!(json, "\"forest\"");
        let id: ThemeId = serde_json::from_str("\"aqua\"").unwrap();
        assert_eq!(id, ThemeId::Aqua);
    }

    #[test]
    fn test_style_var_names() {
        let names: Vec<&str> = StyleVar::ALL.iter().map(|v| v.css_name()).collect();
        assert_eq!(
            names,
            vec![
                "--bg-gradient",
                "--text-color",
                "--logo-bg",
                "--logo-color",
                "--navbar-bg",
                "--navbar-border",
                "--navlink-color",
                "--navlink-hover",
            ]
        );
    }

    #[test]
    fn test_theme_definition_lookup() {
        for id in ThemeId::ALL {
            assert_eq!(theme_definition(id).id, id);
        }
    }

    #[test]
    fn test_every_theme_supplies_all_values() {
        for id in ThemeId::ALL {
            let values = theme_definition(id).values();
            assert_eq!(values.len(), 8);
            for ((var, value), expected) in values.iter().zip(StyleVar::ALL) {
                assert_eq!(*var, expected);
                assert!(!value.is_empty(), "{id} has empty {var}");
            }
        }
    }

    #[test]
    fn test_forest_theme_values() {
        let t = &FOREST;
        assert_eq!(t.bg_gradient, "linear-gradient(25deg, #556270, #4ECDC4, #556270)");
        assert_eq!(t.text_color, "#f1f8e9");
        assert_eq!(t.logo_bg, "#2e7d32");
        assert_eq!(t.logo_color, "#ffffff");
        assert_eq!(t.navbar_bg, "rgba(46, 125, 50, 0.4)");
        assert_eq!(t.navbar_border, "#81c784");
        assert_eq!(t.navlink_color, "#f1f8e9");
        assert_eq!(t.navlink_hover, "#aed581");
    }

    #[test]
    fn test_pink_theme_values() {
        let t = &PINK;
        assert_eq!(t.value(StyleVar::TextColor), "#333333");
        assert_eq!(t.value(StyleVar::NavbarBorder), "#fff");
        assert_eq!(t.value(StyleVar::NavlinkColor), "black");
    }

    #[test]
    fn test_dark_theme_gradient_kept_verbatim() {
        assert_eq!(
            DARK.value(StyleVar::BgGradient),
            "linear-gradient(25deg, #2f2f2f,rgb(116, 132, 139), #4f4f4f)"
        );
        assert_eq!(
            AQUA.value(StyleVar::BgGradient),
            "linear-gradient(25deg,rgb(63, 99, 156) 0%, #c2e9fb 50%,rgb(31, 100, 211) 100%)"
        );
    }
}
