//! Named color palettes.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use super::Color;

/// Resolves a color name to a concrete color.
///
/// The resolution engine only needs this lookup, so callers can back it with
/// whatever palette storage they have.
pub trait ColorLookup {
    /// Returns the color registered under `name`, if any.
    fn lookup(&self, name: &str) -> Option<Color>;
}

impl ColorLookup for BTreeMap<String, Color> {
    fn lookup(&self, name: &str) -> Option<Color> {
        self.get(name).copied()
    }
}

impl ColorLookup for HashMap<String, Color> {
    fn lookup(&self, name: &str) -> Option<Color> {
        self.get(name).copied()
    }
}

/// A named collection of colors loaded from the `typography-colors` section.
///
/// # Example
///
/// ```rust
/// use typestyle::{Color, ColorLookup, ColorPalette};
///
/// let palette = ColorPalette::new()
///     .add("brand", Color::rgb(10, 132, 255))
///     .add("accent", Color::rgb(255, 45, 85));
///
/// assert_eq!(palette.lookup("brand"), Some(Color::rgb(10, 132, 255)));
/// assert_eq!(palette.lookup("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorPalette {
    colors: BTreeMap<String, Color>,
}

impl ColorPalette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named color, returning the updated palette for chaining.
    pub fn add(mut self, name: &str, color: Color) -> Self {
        self.colors.insert(name.to_string(), color);
        self
    }

    /// Inserts a named color in place, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    /// Builds a palette from raw `name -> token` pairs.
    ///
    /// A token is either the name of another entry in the same set or a
    /// literal color. Entry names are checked before literals, the same order
    /// style attributes use, so an entry named `red` shadows the keyword.
    /// Aliases are followed until a literal is reached. Entries that end in an
    /// unparseable token or loop back on themselves are skipped.
    pub fn from_tokens<I, K, V>(tokens: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let raw: BTreeMap<String, String> = tokens
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut palette = Self::new();
        for name in raw.keys() {
            match follow_aliases(name, &raw) {
                Some(color) => palette.insert(name.clone(), color),
                None => {
                    tracing::debug!(color = %name, token = %raw[name], "skipping unresolvable palette color")
                }
            }
        }
        palette
    }

    /// Returns true if a color is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Number of named colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl ColorLookup for ColorPalette {
    fn lookup(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }
}

fn follow_aliases(start: &str, raw: &BTreeMap<String, String>) -> Option<Color> {
    let mut seen = HashSet::new();
    let mut current = start;

    loop {
        if !seen.insert(current) {
            return None;
        }
        let token = raw.get(current)?.trim();
        // An entry naming itself (`red: red`) means the literal.
        if token != current && raw.contains_key(token) {
            current = token;
            continue;
        }
        return token.parse::<Color>().ok();
    }
}
