//! # Typestyle - named typography styles with inheritance
//!
//! `typestyle` loads named text styles from a configuration document,
//! resolves `extends` inheritance between them and publishes the resolved
//! attributes (font, size, colors, letter case, spacing, alignment) for UI
//! bindings to apply.
//!
//! ## Core Concepts
//!
//! - [`TypographyConfig`]: Settings, color palette and style table read from JSON or YAML
//! - [`resolve_all`]: One resolution pass producing a [`Resolution`]
//! - [`Typography`]: The resolved attributes of one style
//! - [`StyleError`]: Cyclic, invalid or dangling `extends` references
//! - [`TypographyStore`]: The published table, swapped atomically on reload
//! - [`ContentSizeCategory`]: Dynamic type sizes for [`Typography::scaled_point_size`]
//!
//! ## Quick Start
//!
//! ```rust
//! use typestyle::{Color, TypographyConfig};
//!
//! let config = TypographyConfig::from_json_str(r##"{
//!     "typography-colors": { "ink": "#141414" },
//!     "ui-font-text-styles": {
//!         "body": { "font-name": "Avenir-Book", "point-size": 16, "text-color": "ink" },
//!         "caption": { "extends": "body", "point-size": 12, "letter-case": "upper" },
//!         "broken": { "extends": "missing" }
//!     }
//! }"##).unwrap();
//!
//! let resolution = config.resolve();
//!
//! let caption = resolution.style("caption").unwrap();
//! assert_eq!(caption.font_name.as_deref(), Some("Avenir-Book"));
//! assert_eq!(caption.point_size, Some(12.0));
//! assert_eq!(caption.text_color, Some(Color::rgb(20, 20, 20)));
//!
//! assert!(resolution.style("broken").is_none());
//! assert_eq!(resolution.error("broken").and_then(|e| e.target()), Some("missing"));
//! ```
//!
//! ## Inheritance
//!
//! A style that `extends` another starts from the other style's resolved
//! attributes and overrides only what it sets itself. Chains may be any
//! depth. A failure never stops the pass: the failing style, and anything
//! extending it, is left out of the resolved table and reported instead.
//!
//! ## Colors
//!
//! Color attributes name a palette entry from `typography-colors` or give a
//! literal: `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(..)`, `rgba(..)` or a keyword
//! such as `black`. See [`color`] for the full list.

pub mod color;
pub mod config;
mod scaling;
mod store;
pub mod style;
mod util;

pub use color::{Color, ColorLookup, ColorPalette, ParseColorError};
pub use config::{ConfigError, ConfigFormat, TypographyConfig, TypographySettings};
pub use scaling::ContentSizeCategory;
pub use store::{StyleSnapshot, TypographyStore};
pub use style::{
    merge, parse_own_attributes, resolve_all, LetterCase, RawStyleEntry, Resolution, ScalingMode,
    SilentReporter, StyleEntry, StyleError, StyleReporter, StyleTable, TextAlignment,
    TracingReporter, Typography, UnknownToken,
};
pub use util::{capitalize_words, rgb_to_ansi256};
