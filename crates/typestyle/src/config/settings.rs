//! Global scaling settings from the `typography-kit` section.

use serde::Serialize;
use serde_json::Value;

use crate::style::ScalingMode;

/// Defaults applied to every style that does not set its own scaling hints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypographySettings {
    pub minimum_point_size: f32,
    pub maximum_point_size: f32,
    /// Points added per content size step in stepping mode.
    pub point_step_size: f32,
    pub point_step_multiplier: f32,
    pub scaling_mode: ScalingMode,
}

impl Default for TypographySettings {
    fn default() -> Self {
        Self {
            minimum_point_size: 1.0,
            maximum_point_size: 100.0,
            point_step_size: 2.0,
            point_step_multiplier: 1.0,
            scaling_mode: ScalingMode::Stepping,
        }
    }
}

impl TypographySettings {
    /// Reads settings leniently; missing or mistyped keys keep their default.
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let number = |key: &str, fallback: f32| {
            value
                .get(key)
                .and_then(Value::as_f64)
                .map_or(fallback, |n| n as f32)
        };

        Self {
            minimum_point_size: number("minimum-point-size", defaults.minimum_point_size),
            maximum_point_size: number("maximum-point-size", defaults.maximum_point_size),
            point_step_size: number("point-step-size", defaults.point_step_size),
            point_step_multiplier: number("point-step-multiplier", defaults.point_step_multiplier),
            scaling_mode: value
                .get("scaling-mode")
                .and_then(Value::as_str)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.scaling_mode),
        }
    }
}
