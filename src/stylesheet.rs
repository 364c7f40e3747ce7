//! Named styles and the default vertex style.

use std::collections::HashMap;

use crate::defaults::{self, keys, names};
use crate::errors::StyleError;
use crate::log::debug;
use crate::parse::parse_style;
use crate::style::{Style, StyleValue};

/// A set of named styles plus the style every vertex starts from.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    default_vertex: Style,
    styles: HashMap<String, Style>,
}

impl Default for Stylesheet {
    fn default() -> Self {
        let default_vertex = Style::new()
            .with(keys::SHAPE, names::RECTANGLE)
            .with(keys::FILL_COLOR, defaults::DEFAULT_FILL_COLOR)
            .with(keys::STROKE_COLOR, defaults::DEFAULT_STROKE_COLOR);
        Self {
            default_vertex,
            styles: HashMap::new(),
        }
    }
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_vertex_style(&self) -> &Style {
        &self.default_vertex
    }

    /// Register (or replace) a named style.
    pub fn put(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Resolve an element's style string into a full style.
    ///
    /// Starts from the default vertex style, applies named styles in order,
    /// then the inline entries. An inline value of `none` removes the key.
    pub fn resolve(&self, source: &str) -> Result<Style, StyleError> {
        let inline = parse_style(source)?;
        Ok(self.resolve_parsed(&inline))
    }

    /// Same as [`Stylesheet::resolve`] for an already parsed style.
    pub fn resolve_parsed(&self, inline: &Style) -> Style {
        let mut resolved = self.default_vertex.clone();

        for name in inline.names() {
            match self.styles.get(name) {
                Some(named) => resolved.merge(named),
                // Unknown bare names pick a shape, as in `cube;size=10`.
                None => {
                    debug!(name = %name, "unknown named style, using it as the shape name");
                    resolved.set(keys::SHAPE, name.as_str());
                }
            }
        }

        for (key, value) in inline.iter() {
            if matches!(value, StyleValue::Text(t) if t == defaults::NONE) && !is_color_key(key) {
                resolved.remove(key);
            } else {
                resolved.set(key, value.clone());
            }
        }
        resolved
    }
}

/// Colors keep `none` as a value: it must override an inherited color.
fn is_color_key(key: &str) -> bool {
    key.ends_with("Color")
}
