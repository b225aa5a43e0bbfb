//! Root styling contexts
//!
//! [`StyleContext`] is the seam themes are written through. Hosts with a
//! live page implement it over the document root; [`StyleSheet`] keeps the
//! properties in memory and renders them as a CSS rule or JSON.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A root styling context that accepts custom property writes.
pub trait StyleContext {
    /// Set `name` to `value`, replacing any previous value.
    fn set_property(&mut self, name: &str, value: &str);
}

impl<T: StyleContext + ?Sized> StyleContext for &mut T {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }
}

/// In-memory styling context.
///
/// Properties keep the order they were first written in; rewriting a name
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    properties: Vec<(String, String)>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a property
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate `(name, value)` pairs in write order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render as a single CSS rule.
    ///
    /// An empty sheet renders to the empty string.
    pub fn render_css(&self, selector: &str, indent: u8) -> String {
        if self.is_empty() {
            return String::new();
        }

        let pad = " ".repeat(usize::from(indent));
        let mut out = format!("{selector} {{\n");
        for (name, value) in self.iter() {
            out.push_str(&format!("{pad}{name}: {value};\n"));
        }
        out.push_str("}\n");
        out
    }
}

impl StyleContext for StyleSheet {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => {
                existing.clear();
                existing.push_str(value);
            }
            None => self.properties.push((name.to_string(), value.to_string())),
        }
    }
}

// Serialized as an ordered JSON object: {"--bg-gradient": "...", ...}
impl Serialize for StyleSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
