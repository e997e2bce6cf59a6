//! Colors, literal color tokens and named palettes.
//!
//! Style entries refer to colors by string. A string is first looked up in a
//! [`ColorLookup`] (usually a [`ColorPalette`] loaded from configuration) and,
//! if that misses, parsed as a literal color token:
//!
//! | Form | Example |
//! |------|---------|
//! | Short hex | `#0af` |
//! | Hex | `#00AAFF` |
//! | Hex with alpha | `#00AAFF80` |
//! | RGB function | `rgb(0, 170, 255)` |
//! | RGBA function | `rgba(0, 170, 255, 0.5)` |
//! | Keyword | `black`, `light-gray`, `clear` |

mod literal;
mod palette;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use literal::ParseColorError;
pub use palette::{ColorLookup, ColorPalette};

use crate::util::rgb_to_ansi256;

/// An sRGB color with 8-bit channels and alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns true when the alpha channel is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Nearest index in the ANSI 256-color palette, ignoring alpha.
    pub fn to_ansi256(&self) -> u8 {
        rgb_to_ansi256((self.r, self.g, self.b))
    }

    /// Hex representation, `#RRGGBB` for opaque colors and `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        literal::parse_color(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
