//! Loading typography configuration documents.
//!
//! A configuration document is a JSON or YAML mapping with three optional
//! sections:
//!
//! ```yaml
//! typography-kit:
//!   point-step-size: 2
//!   scaling-mode: stepping
//! typography-colors:
//!   ink: "#141414"
//!   muted: ink
//! ui-font-text-styles:
//!   body: { font-name: Avenir-Book, point-size: 16, text-color: ink }
//!   caption: { extends: body, point-size: 12 }
//! ```
//!
//! Every section is read leniently. Missing sections are empty, malformed
//! style entries contribute no attributes, and palette colors that cannot be
//! parsed are skipped. Errors are reserved for unreadable files, unknown
//! file extensions, invalid JSON/YAML and documents whose root is not a
//! mapping.

mod error;
mod settings;

use std::path::Path;

use serde_json::Value;

pub use error::ConfigError;
pub use settings::TypographySettings;

use crate::color::ColorPalette;
use crate::style::{resolve_all, Resolution, StyleTable};

/// Top-level section holding global scaling settings.
pub const SETTINGS_SECTION: &str = "typography-kit";
/// Top-level section holding the named color palette.
pub const COLORS_SECTION: &str = "typography-colors";
/// Top-level section holding the style table.
pub const STYLES_SECTION: &str = "ui-font-text-styles";

/// Document syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

/// A parsed configuration: settings, palette and raw style table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypographyConfig {
    pub settings: TypographySettings,
    pub colors: ColorPalette,
    pub styles: StyleTable,
}

impl TypographyConfig {
    /// Builds a configuration from an already parsed document.
    pub fn from_value(document: &Value) -> Result<Self, ConfigError> {
        let root = document.as_object().ok_or(ConfigError::NotAMapping)?;

        let settings = root
            .get(SETTINGS_SECTION)
            .map(TypographySettings::from_value)
            .unwrap_or_default();

        let colors = root
            .get(COLORS_SECTION)
            .and_then(Value::as_object)
            .map(|colors| {
                ColorPalette::from_tokens(colors.iter().filter_map(|(name, token)| {
                    match token.as_str() {
                        Some(token) => Some((name.clone(), token.to_string())),
                        None => {
                            tracing::debug!(color = %name, "skipping non-string palette color");
                            None
                        }
                    }
                }))
            })
            .unwrap_or_default();

        let styles = root
            .get(STYLES_SECTION)
            .map(StyleTable::from_json)
            .unwrap_or_default();

        Ok(Self {
            settings,
            colors,
            styles,
        })
    }

    /// Parses a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let document: Value = serde_json::from_str(source)?;
        Self::from_value(&document)
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let document: Value = serde_yaml::from_str(source)?;
        Self::from_value(&document)
    }

    /// Parses a document in the given format.
    pub fn from_str_with_format(source: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Json => Self::from_json_str(source),
            ConfigFormat::Yaml => Self::from_yaml_str(source),
        }
    }

    /// Reads a file, choosing the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str_with_format(&source, format)
    }

    /// Runs a resolution pass over this configuration's styles.
    pub fn resolve(&self) -> Resolution {
        resolve_all(&self.styles, &self.colors)
    }
}
