//! Per-element style dictionary.
//!
//! Styles are loosely typed: every value is a number, a piece of text or a
//! boolean. Shapes never read raw values directly; they go through the typed
//! getters here, which fall back to a compiled-in default whenever a value is
//! absent or cannot be read as the requested type, and clamp numbers into
//! their valid domain before any geometry sees them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::defaults::keys;
use crate::errors::StyleError;
use crate::log::warn;
use crate::types::{Direction, clamp};

/// A single style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl StyleValue {
    /// Interpret raw text from a style string.
    ///
    /// `true`/`false` become booleans, finite decimals become numbers and
    /// everything else (colors, names, `NaN`) stays text.
    pub fn parse(raw: &str) -> StyleValue {
        let raw = raw.trim();
        match raw {
            "true" => return StyleValue::Bool(true),
            "false" => return StyleValue::Bool(false),
            _ => {}
        }
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => StyleValue::Number(n),
            _ => StyleValue::Text(raw.to_string()),
        }
    }

    /// The value as a finite number, if it is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) if n.is_finite() => Some(*n),
            StyleValue::Number(_) => None,
            StyleValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            StyleValue::Bool(_) => None,
        }
    }

    /// The value as a flag: booleans as-is, numbers are set when non-zero,
    /// and the texts `true`/`false`/`1`/`0`.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            StyleValue::Number(n) if n.is_nan() => None,
            StyleValue::Number(n) => Some(*n != 0.0),
            StyleValue::Text(s) => match s.trim() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

/// Key/value style of one diagram element, plus the named styles it references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    values: HashMap<String, StyleValue>,
    names: Vec<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Named styles referenced by bare entries, in source order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn push_name(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Copy every value of `other` over this style.
    pub fn merge(&mut self, other: &Style) {
        for (k, v) in &other.values {
            self.values.insert(k.clone(), v.clone());
        }
    }

    /// Numeric value for `key`, or `default` when absent or unreadable.
    pub fn number(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            None => default,
            Some(value) => match value.as_number() {
                Some(n) => n,
                None => {
                    warn!(key, %value, default, "style value is not a number, using default");
                    default
                }
            },
        }
    }

    /// Numeric value for `key` with fallback, clamped into `[lo, hi]`.
    pub fn clamped(&self, key: &str, default: f64, lo: f64, hi: f64) -> f64 {
        clamp(self.number(key, default), lo, hi)
    }

    /// Flag value for `key`, or `default` when absent or unreadable.
    pub fn flag(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(StyleValue::as_flag).unwrap_or(default)
    }

    /// Text value for `key`. Numbers and booleans are not text.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_text)
    }

    /// Color for `key`; `none` reads as no color at all.
    pub fn color(&self, key: &str) -> Option<&str> {
        self.text(key)
            .filter(|c| !c.eq_ignore_ascii_case(crate::defaults::NONE))
    }

    /// The `shape` entry, if any.
    pub fn shape_name(&self) -> Option<&str> {
        self.text(keys::SHAPE)
    }

    /// The `direction` entry; unknown values read as no direction.
    pub fn direction(&self) -> Option<Direction> {
        self.text(keys::DIRECTION).and_then(|d| d.parse().ok())
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_style(s)
    }
}
