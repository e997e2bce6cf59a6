//! Raw style entries and the lenient own-attribute parser.
//!
//! Configuration hands us loosely typed attribute bags. This module is the one
//! place where they become typed values: each recognized key is read into an
//! optional field of [`StyleEntry`], and anything missing, unknown or of the
//! wrong type is simply left unset.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::attributes::{LetterCase, ScalingMode, TextAlignment};
use super::typography::Typography;
use crate::color::{Color, ColorLookup};

/// A loosely typed attribute bag as read from configuration.
pub type RawStyleEntry = Map<String, Value>;

/// Recognized attribute keys.
pub mod keys {
    pub const EXTENDS: &str = "extends";
    pub const FONT_NAME: &str = "font-name";
    pub const LETTER_CASE: &str = "letter-case";
    pub const MAXIMUM_POINT_SIZE: &str = "maximum-point-size";
    pub const MINIMUM_POINT_SIZE: &str = "minimum-point-size";
    pub const POINT_SIZE: &str = "point-size";
    pub const SCALING_MODE: &str = "scaling-mode";
    pub const TEXT_COLOR: &str = "text-color";
    pub const DISABLED_TEXT_COLOR: &str = "disabled-text-color";
    pub const HIGHLIGHTED_TEXT_COLOR: &str = "highlighted-text-color";
    pub const SELECTED_TEXT_COLOR: &str = "selected-text-color";
    pub const TINT_COLOR: &str = "tint-color";
    pub const BACKGROUND_COLOR: &str = "background-color";
    pub const LINE_SPACING: &str = "line-spacing";
    pub const LETTER_SPACING: &str = "letter-spacing";
    pub const TEXT_ALIGNMENT: &str = "text-alignment";
}

/// A typed style entry, before inheritance is applied.
///
/// Color attributes keep their configuration token; they are resolved against
/// a palette when the entry is turned into a [`Typography`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleEntry {
    pub extends: Option<String>,
    pub font_name: Option<String>,
    pub point_size: Option<f32>,
    pub letter_case: Option<LetterCase>,
    pub text_color: Option<String>,
    pub disabled_text_color: Option<String>,
    pub highlighted_text_color: Option<String>,
    pub selected_text_color: Option<String>,
    pub tint_color: Option<String>,
    pub background_color: Option<String>,
    pub line_spacing: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub text_alignment: Option<TextAlignment>,
    pub minimum_point_size: Option<f32>,
    pub maximum_point_size: Option<f32>,
    pub scaling_mode: Option<ScalingMode>,
}

fn string(raw: &RawStyleEntry, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn number(raw: &RawStyleEntry, key: &str) -> Option<f32> {
    raw.get(key).and_then(Value::as_f64).map(|n| n as f32)
}

fn token<T: std::str::FromStr>(raw: &RawStyleEntry, key: &str) -> Option<T> {
    raw.get(key).and_then(Value::as_str).and_then(|s| s.parse().ok())
}

impl StyleEntry {
    /// Reads the recognized keys of a raw attribute bag.
    pub fn from_raw(raw: &RawStyleEntry) -> Self {
        Self {
            extends: string(raw, keys::EXTENDS),
            font_name: string(raw, keys::FONT_NAME),
            point_size: number(raw, keys::POINT_SIZE),
            letter_case: token(raw, keys::LETTER_CASE),
            text_color: string(raw, keys::TEXT_COLOR),
            disabled_text_color: string(raw, keys::DISABLED_TEXT_COLOR),
            highlighted_text_color: string(raw, keys::HIGHLIGHTED_TEXT_COLOR),
            selected_text_color: string(raw, keys::SELECTED_TEXT_COLOR),
            tint_color: string(raw, keys::TINT_COLOR),
            background_color: string(raw, keys::BACKGROUND_COLOR),
            line_spacing: number(raw, keys::LINE_SPACING),
            letter_spacing: number(raw, keys::LETTER_SPACING),
            text_alignment: token(raw, keys::TEXT_ALIGNMENT),
            minimum_point_size: number(raw, keys::MINIMUM_POINT_SIZE),
            maximum_point_size: number(raw, keys::MAXIMUM_POINT_SIZE),
            scaling_mode: token(raw, keys::SCALING_MODE),
        }
    }

    /// Reads an entry from any JSON value. Non-object values give an empty entry.
    pub fn from_value(value: &Value) -> Self {
        value.as_object().map(Self::from_raw).unwrap_or_default()
    }

    /// Builds the entry's own typography, ignoring `extends`.
    pub fn to_typography(&self, name: &str, colors: &dyn ColorLookup) -> Typography {
        let color = |token: &Option<String>| token.as_deref().and_then(|t| resolve_color(t, colors));

        Typography {
            name: name.to_string(),
            font_name: self.font_name.clone(),
            point_size: self.point_size,
            letter_case: self.letter_case,
            text_color: color(&self.text_color),
            disabled_text_color: color(&self.disabled_text_color),
            highlighted_text_color: color(&self.highlighted_text_color),
            selected_text_color: color(&self.selected_text_color),
            tint_color: color(&self.tint_color),
            background_color: color(&self.background_color),
            line_spacing: self.line_spacing,
            letter_spacing: self.letter_spacing,
            text_alignment: self.text_alignment,
            minimum_point_size: self.minimum_point_size,
            maximum_point_size: self.maximum_point_size,
            scaling_mode: self.scaling_mode,
        }
    }
}

/// Palette first, literal token second.
pub fn resolve_color(token: &str, colors: &dyn ColorLookup) -> Option<Color> {
    colors.lookup(token).or_else(|| token.parse().ok())
}

/// Parses a raw attribute bag straight into the entry's own typography.
pub fn parse_own_attributes(name: &str, raw: &RawStyleEntry, colors: &dyn ColorLookup) -> Typography {
    StyleEntry::from_raw(raw).to_typography(name, colors)
}

/// Every style entry of one configuration, keyed by style name.
///
/// ```rust
/// use typestyle::StyleTable;
/// use serde_json::json;
///
/// let table = StyleTable::from_json(&json!({
///     "body": { "font-name": "Avenir", "point-size": 16 },
///     "caption": { "extends": "body", "point-size": 12 },
/// }));
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get("caption").and_then(|e| e.extends.as_deref()), Some("body"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    entries: BTreeMap<String, StyleEntry>,
}

impl StyleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a JSON object of style entries.
    ///
    /// Anything other than an object yields an empty table.
    pub fn from_json(value: &Value) -> Self {
        value
            .as_object()
            .map(|styles| {
                styles
                    .iter()
                    .map(|(name, entry)| (name.clone(), StyleEntry::from_value(entry)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&StyleEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, StyleEntry)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (String, StyleEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
