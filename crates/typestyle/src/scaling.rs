//! Dynamic type: point sizes that follow the user's preferred content size.
//!
//! Observing the platform setting is left to UI bindings. This module only
//! computes the size a resolved style should use for a given category.

use std::fmt;
use std::str::FromStr;

use crate::config::TypographySettings;
use crate::style::{ScalingMode, Typography, UnknownToken};

/// The user's preferred text size, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ContentSizeCategory {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
}

impl ContentSizeCategory {
    pub const ALL: [ContentSizeCategory; 12] = [
        ContentSizeCategory::ExtraSmall,
        ContentSizeCategory::Small,
        ContentSizeCategory::Medium,
        ContentSizeCategory::Large,
        ContentSizeCategory::ExtraLarge,
        ContentSizeCategory::ExtraExtraLarge,
        ContentSizeCategory::ExtraExtraExtraLarge,
        ContentSizeCategory::AccessibilityMedium,
        ContentSizeCategory::AccessibilityLarge,
        ContentSizeCategory::AccessibilityExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraExtraLarge,
    ];

    /// Steps away from [`Large`](Self::Large), the platform default.
    pub fn offset(&self) -> i32 {
        *self as i32 - ContentSizeCategory::Large as i32
    }

    /// Body text size ratio relative to `Large`, as used by platform font metrics.
    pub fn scale_factor(&self) -> f32 {
        let body = match self {
            ContentSizeCategory::ExtraSmall => 14.0,
            ContentSizeCategory::Small => 15.0,
            ContentSizeCategory::Medium => 16.0,
            ContentSizeCategory::Large => 17.0,
            ContentSizeCategory::ExtraLarge => 19.0,
            ContentSizeCategory::ExtraExtraLarge => 21.0,
            ContentSizeCategory::ExtraExtraExtraLarge => 23.0,
            ContentSizeCategory::AccessibilityMedium => 28.0,
            ContentSizeCategory::AccessibilityLarge => 33.0,
            ContentSizeCategory::AccessibilityExtraLarge => 40.0,
            ContentSizeCategory::AccessibilityExtraExtraLarge => 47.0,
            ContentSizeCategory::AccessibilityExtraExtraExtraLarge => 53.0,
        };
        body / 17.0
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSizeCategory::ExtraSmall => "extra-small",
            ContentSizeCategory::Small => "small",
            ContentSizeCategory::Medium => "medium",
            ContentSizeCategory::Large => "large",
            ContentSizeCategory::ExtraLarge => "extra-large",
            ContentSizeCategory::ExtraExtraLarge => "extra-extra-large",
            ContentSizeCategory::ExtraExtraExtraLarge => "extra-extra-extra-large",
            ContentSizeCategory::AccessibilityMedium => "accessibility-medium",
            ContentSizeCategory::AccessibilityLarge => "accessibility-large",
            ContentSizeCategory::AccessibilityExtraLarge => "accessibility-extra-large",
            ContentSizeCategory::AccessibilityExtraExtraLarge => "accessibility-extra-extra-large",
            ContentSizeCategory::AccessibilityExtraExtraExtraLarge => {
                "accessibility-extra-extra-extra-large"
            }
        }
    }
}

impl FromStr for ContentSizeCategory {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let short = match token.as_str() {
            "xs" => Some(ContentSizeCategory::ExtraSmall),
            "s" => Some(ContentSizeCategory::Small),
            "m" => Some(ContentSizeCategory::Medium),
            "l" => Some(ContentSizeCategory::Large),
            "xl" => Some(ContentSizeCategory::ExtraLarge),
            "xxl" => Some(ContentSizeCategory::ExtraExtraLarge),
            "xxxl" => Some(ContentSizeCategory::ExtraExtraExtraLarge),
            _ => None,
        };

        short
            .or_else(|| Self::ALL.into_iter().find(|c| c.as_str() == token))
            .ok_or_else(|| UnknownToken {
                kind: "content size category",
                token: s.to_string(),
            })
    }
}

impl fmt::Display for ContentSizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Smallest size ever produced by scaling.
const MINIMUM_RENDERABLE_SIZE: f32 = 1.0;

impl Typography {
    /// Point size for `category`, or `None` when the style sets no size.
    ///
    /// The style's own scaling mode and bounds take precedence over those in
    /// `settings`.
    ///
    /// ```rust
    /// use typestyle::{ContentSizeCategory, Typography, TypographySettings};
    ///
    /// let body = Typography { point_size: Some(16.0), ..Typography::named("body") };
    /// let settings = TypographySettings::default();
    ///
    /// assert_eq!(body.scaled_point_size(ContentSizeCategory::Large, &settings), Some(16.0));
    /// assert_eq!(body.scaled_point_size(ContentSizeCategory::ExtraLarge, &settings), Some(18.0));
    /// ```
    pub fn scaled_point_size(
        &self,
        category: ContentSizeCategory,
        settings: &TypographySettings,
    ) -> Option<f32> {
        let base = self.point_size?;
        let mode = self.scaling_mode.unwrap_or(settings.scaling_mode);

        let scaled = match mode {
            ScalingMode::Disabled => return Some(base),
            ScalingMode::Stepping | ScalingMode::FontMetricsWithFallback => {
                base + settings.point_step_size
                    * settings.point_step_multiplier
                    * category.offset() as f32
            }
            ScalingMode::FontMetrics => base * category.scale_factor(),
        };

        let min = self.minimum_point_size.unwrap_or(settings.minimum_point_size);
        let max = self.maximum_point_size.unwrap_or(settings.maximum_point_size);

        Some(scaled.min(max).max(min).max(MINIMUM_RENDERABLE_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(size: f32) -> Typography {
        Typography {
            point_size: Some(size),
            ..Typography::named("t")
        }
    }

    #[test]
    fn test_offsets() {
        assert_eq!(ContentSizeCategory::ExtraSmall.offset(), -3);
        assert_eq!(ContentSizeCategory::Large.offset(), 0);
        assert_eq!(ContentSizeCategory::AccessibilityExtraExtraExtraLarge.offset(), 8);
    }

    #[test]
    fn test_parse_categories() {
        assert_eq!("xl".parse(), Ok(ContentSizeCategory::ExtraLarge));
        assert_eq!(
            "Accessibility-Large".parse(),
            Ok(ContentSizeCategory::AccessibilityLarge)
        );
        assert!("huge".parse::<ContentSizeCategory>().is_err());
    }

    #[test]
    fn test_canonical_tokens_parse_back() {
        for category in ContentSizeCategory::ALL {
            assert_eq!(category.as_str().parse(), Ok(category));
        }
    }

    #[test]
    fn test_no_point_size() {
        let settings = TypographySettings::default();
        assert_eq!(
            Typography::named("t").scaled_point_size(ContentSizeCategory::Large, &settings),
            None
        );
    }

    #[test]
    fn test_stepping_uses_step_and_multiplier() {
        let settings = TypographySettings {
            point_step_size: 2.0,
            point_step_multiplier: 1.5,
            ..TypographySettings::default()
        };
        let size = sized(16.0).scaled_point_size(ContentSizeCategory::ExtraSmall, &settings);
        assert_eq!(size, Some(7.0));
    }

    #[test]
    fn test_disabled_ignores_bounds() {
        let settings = TypographySettings::default();
        let style = Typography {
            scaling_mode: Some(ScalingMode::Disabled),
            maximum_point_size: Some(10.0),
            ..sized(16.0)
        };
        assert_eq!(
            style.scaled_point_size(ContentSizeCategory::AccessibilityLarge, &settings),
            Some(16.0)
        );
    }

    #[test]
    fn test_style_bounds_win_over_settings() {
        let settings = TypographySettings::default();
        let style = Typography {
            maximum_point_size: Some(20.0),
            ..sized(16.0)
        };
        assert_eq!(
            style.scaled_point_size(ContentSizeCategory::AccessibilityExtraLarge, &settings),
            Some(20.0)
        );
    }

    #[test]
    fn test_settings_minimum_applies() {
        let settings = TypographySettings {
            minimum_point_size: 12.0,
            ..TypographySettings::default()
        };
        assert_eq!(
            sized(13.0).scaled_point_size(ContentSizeCategory::ExtraSmall, &settings),
            Some(12.0)
        );
    }

    #[test]
    fn test_font_metrics_scales_proportionally() {
        let settings = TypographySettings {
            scaling_mode: ScalingMode::FontMetrics,
            ..TypographySettings::default()
        };
        let size = sized(34.0)
            .scaled_point_size(ContentSizeCategory::ExtraLarge, &settings)
            .unwrap();
        assert!((size - 38.0).abs() < 0.001);
    }

    #[test]
    fn test_never_below_one_point() {
        let settings = TypographySettings {
            minimum_point_size: 0.0,
            point_step_size: 10.0,
            ..TypographySettings::default()
        };
        assert_eq!(
            sized(2.0).scaled_point_size(ContentSizeCategory::ExtraSmall, &settings),
            Some(1.0)
        );
    }
}
