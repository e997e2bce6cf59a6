//! Enumerated typography attributes.
//!
//! Each enum parses from the tokens accepted in configuration files and
//! serializes back to its canonical kebab-case token.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::util::capitalize_words;

/// Error returned when a configuration token does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{token}'")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
}

fn normalize(token: &str) -> String {
    token.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

/// Case transform applied to text before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterCase {
    /// Text is displayed as written.
    #[default]
    Regular,
    Upper,
    Lower,
    /// First letter of each word uppercased.
    Capitalized,
}

impl LetterCase {
    /// Canonical configuration token.
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterCase::Regular => "regular",
            LetterCase::Upper => "upper",
            LetterCase::Lower => "lower",
            LetterCase::Capitalized => "capitalized",
        }
    }

    /// Applies the transform to `text`.
    ///
    /// ```rust
    /// use typestyle::LetterCase;
    ///
    /// assert_eq!(LetterCase::Upper.apply("Sign in"), "SIGN IN");
    /// assert_eq!(LetterCase::Capitalized.apply("sign in"), "Sign In");
    /// ```
    pub fn apply(&self, text: &str) -> String {
        match self {
            LetterCase::Regular => text.to_string(),
            LetterCase::Upper => text.to_uppercase(),
            LetterCase::Lower => text.to_lowercase(),
            LetterCase::Capitalized => capitalize_words(text),
        }
    }
}

impl FromStr for LetterCase {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "regular" | "as-is" => Ok(LetterCase::Regular),
            "upper" | "uppercase" => Ok(LetterCase::Upper),
            "lower" | "lowercase" => Ok(LetterCase::Lower),
            "capitalized" | "capitalised" | "title" => Ok(LetterCase::Capitalized),
            _ => Err(UnknownToken {
                kind: "letter case",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LetterCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal alignment of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justified,
    /// Leading edge for the current writing direction.
    Natural,
}

impl TextAlignment {
    /// Canonical configuration token.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlignment::Left => "left",
            TextAlignment::Center => "center",
            TextAlignment::Right => "right",
            TextAlignment::Justified => "justified",
            TextAlignment::Natural => "natural",
        }
    }
}

impl FromStr for TextAlignment {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "left" => Ok(TextAlignment::Left),
            "center" | "centre" => Ok(TextAlignment::Center),
            "right" => Ok(TextAlignment::Right),
            "justified" | "justify" => Ok(TextAlignment::Justified),
            "natural" => Ok(TextAlignment::Natural),
            _ => Err(UnknownToken {
                kind: "text alignment",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TextAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a style's point size reacts to the user's preferred content size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalingMode {
    /// Point size never changes.
    Disabled,
    /// Fixed point increments per content size step.
    #[default]
    Stepping,
    /// Proportional scaling using platform body text metrics.
    FontMetrics,
    /// Platform metrics where available, stepping otherwise.
    FontMetricsWithFallback,
}

impl ScalingMode {
    /// Canonical configuration token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalingMode::Disabled => "disabled",
            ScalingMode::Stepping => "stepping",
            ScalingMode::FontMetrics => "font-metrics",
            ScalingMode::FontMetricsWithFallback => "font-metrics-with-fallback",
        }
    }
}

impl FromStr for ScalingMode {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "disabled" => Ok(ScalingMode::Disabled),
            "stepping" => Ok(ScalingMode::Stepping),
            "fontmetrics" | "font-metrics" | "uifontmetrics" => Ok(ScalingMode::FontMetrics),
            "fontmetrics-with-fallback"
            | "font-metrics-with-fallback"
            | "uifontmetrics-with-fallback" => Ok(ScalingMode::FontMetricsWithFallback),
            _ => Err(UnknownToken {
                kind: "scaling mode",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ScalingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_case_aliases() {
        assert_eq!("as-is".parse(), Ok(LetterCase::Regular));
        assert_eq!("UPPERCASE".parse(), Ok(LetterCase::Upper));
        assert_eq!("lower".parse(), Ok(LetterCase::Lower));
        assert_eq!("title".parse(), Ok(LetterCase::Capitalized));
    }

    #[test]
    fn test_letter_case_unknown() {
        let err = "kebab".parse::<LetterCase>().unwrap_err();
        assert_eq!(err.kind, "letter case");
        assert!(err.to_string().contains("kebab"));
    }

    #[test]
    fn test_letter_case_apply() {
        assert_eq!(LetterCase::Regular.apply("MiXed"), "MiXed");
        assert_eq!(LetterCase::Lower.apply("MiXed"), "mixed");
    }

    #[test]
    fn test_alignment_aliases() {
        assert_eq!("centre".parse(), Ok(TextAlignment::Center));
        assert_eq!("Justify".parse(), Ok(TextAlignment::Justified));
        assert!("middle".parse::<TextAlignment>().is_err());
    }

    #[test]
    fn test_scaling_mode_aliases() {
        assert_eq!("uifontmetrics".parse(), Ok(ScalingMode::FontMetrics));
        assert_eq!(
            "uifontmetrics-with-fallback".parse(),
            Ok(ScalingMode::FontMetricsWithFallback)
        );
        assert_eq!("font_metrics".parse(), Ok(ScalingMode::FontMetrics));
    }

    #[test]
    fn test_canonical_tokens_parse_back() {
        for mode in [
            ScalingMode::Disabled,
            ScalingMode::Stepping,
            ScalingMode::FontMetrics,
            ScalingMode::FontMetricsWithFallback,
        ] {
            assert_eq!(mode.as_str().parse(), Ok(mode));
        }
    }

    #[test]
    fn test_serialize_kebab_case() {
        let json = serde_json::to_string(&ScalingMode::FontMetricsWithFallback).unwrap();
        assert_eq!(json, "\"font-metrics-with-fallback\"");
    }
}
