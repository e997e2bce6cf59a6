//! The resolved typography record and inheritance merge.

use serde::Serialize;

use super::attributes::{LetterCase, ScalingMode, TextAlignment};
use crate::color::Color;

/// Concrete visual attributes for one named style.
///
/// Every attribute is optional. An absent attribute means the style does not
/// specify it and the consumer should fall back to its platform default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Typography {
    /// The style's own name, never inherited.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_case: Option<LetterCase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_alignment: Option<TextAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_point_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_point_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_mode: Option<ScalingMode>,
}

impl Typography {
    /// Creates a style with a name and no attributes set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Layers `overrides` on top of `self`.
    ///
    /// The result takes its name from `overrides`. Every other attribute comes
    /// from `overrides` when set there and from `self` otherwise; nothing
    /// falls back further than `self`.
    ///
    /// ```rust
    /// use typestyle::Typography;
    ///
    /// let base = Typography {
    ///     font_name: Some("Arial".into()),
    ///     point_size: Some(12.0),
    ///     ..Typography::named("base")
    /// };
    /// let child = Typography {
    ///     point_size: Some(14.0),
    ///     ..Typography::named("child")
    /// };
    ///
    /// let merged = base.extend(&child);
    /// assert_eq!(merged.name, "child");
    /// assert_eq!(merged.font_name.as_deref(), Some("Arial"));
    /// assert_eq!(merged.point_size, Some(14.0));
    /// ```
    pub fn extend(&self, overrides: &Typography) -> Typography {
        Typography {
            name: overrides.name.clone(),
            font_name: overrides.font_name.clone().or_else(|| self.font_name.clone()),
            point_size: overrides.point_size.or(self.point_size),
            letter_case: overrides.letter_case.or(self.letter_case),
            text_color: overrides.text_color.or(self.text_color),
            disabled_text_color: overrides.disabled_text_color.or(self.disabled_text_color),
            highlighted_text_color: overrides
                .highlighted_text_color
                .or(self.highlighted_text_color),
            selected_text_color: overrides.selected_text_color.or(self.selected_text_color),
            tint_color: overrides.tint_color.or(self.tint_color),
            background_color: overrides.background_color.or(self.background_color),
            line_spacing: overrides.line_spacing.or(self.line_spacing),
            letter_spacing: overrides.letter_spacing.or(self.letter_spacing),
            text_alignment: overrides.text_alignment.or(self.text_alignment),
            minimum_point_size: overrides.minimum_point_size.or(self.minimum_point_size),
            maximum_point_size: overrides.maximum_point_size.or(self.maximum_point_size),
            scaling_mode: overrides.scaling_mode.or(self.scaling_mode),
        }
    }
}

/// Free-function form of [`Typography::extend`].
pub fn merge(base: &Typography, overrides: &Typography) -> Typography {
    base.extend(overrides)
}
