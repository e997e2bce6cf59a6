//! Rendering resolution results for the terminal or as structured data.

use std::collections::BTreeMap;
use std::fmt::Write;

use console::Style;
use serde::Serialize;
use typestyle::{Color, ContentSizeCategory, Resolution, StyleError, Typography, TypographySettings};

use crate::cli::Format;

/// One style as written in structured output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct StyleView<'a> {
    #[serde(flatten)]
    typography: &'a Typography,
    #[serde(skip_serializing_if = "Option::is_none")]
    scaled_point_size: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ErrorView<'a> {
    kind: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cycle: Option<&'a [String]>,
}

impl<'a> From<&'a StyleError> for ErrorView<'a> {
    fn from(error: &'a StyleError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
            target: error.target(),
            cycle: error.cycle(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    styles: BTreeMap<&'a str, StyleView<'a>>,
    errors: BTreeMap<&'a str, ErrorView<'a>>,
}

/// What to include when showing styles.
pub struct ShowOptions<'a> {
    pub style: Option<&'a str>,
    pub category: Option<ContentSizeCategory>,
    pub settings: &'a TypographySettings,
}

fn selected<'a, T>(
    map: &'a BTreeMap<String, T>,
    only: Option<&'a str>,
) -> impl Iterator<Item = (&'a str, &'a T)> {
    map.iter()
        .map(|(k, v)| (k.as_str(), v))
        .filter(move |(k, _)| only.map_or(true, |name| name == *k))
}

/// Renders the resolved styles (and failures) in the requested format.
pub fn show(resolution: &Resolution, options: &ShowOptions<'_>, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(show_text(resolution, options)),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&report(resolution, options))?;
            json.push('\n');
            Ok(json)
        }
        Format::Yaml => Ok(serde_yaml::to_string(&report(resolution, options))?),
    }
}

fn report<'a>(resolution: &'a Resolution, options: &ShowOptions<'a>) -> Report<'a> {
    Report {
        styles: selected(resolution.styles(), options.style)
            .map(|(name, typography)| {
                let scaled_point_size = options
                    .category
                    .and_then(|c| typography.scaled_point_size(c, options.settings));
                (
                    name,
                    StyleView {
                        typography,
                        scaled_point_size,
                    },
                )
            })
            .collect(),
        errors: selected(resolution.errors(), options.style)
            .map(|(name, error)| (name, ErrorView::from(error)))
            .collect(),
    }
}

fn swatch(color: &Color) -> String {
    let block = Style::new().color256(color.to_ansi256()).apply_to("■");
    format!("{block} {color}")
}

fn show_text(resolution: &Resolution, options: &ShowOptions<'_>) -> String {
    let heading = Style::new().bold();
    let label = Style::new().dim();
    let mut out = String::new();

    for (name, t) in selected(resolution.styles(), options.style) {
        let _ = writeln!(out, "{}", heading.apply_to(name));

        let mut field = |key: &str, value: String| {
            let _ = writeln!(out, "  {:<24}{}", label.apply_to(key), value);
        };

        if let Some(font) = &t.font_name {
            field("font-name", font.clone());
        }
        if let Some(size) = t.point_size {
            field("point-size", size.to_string());
        }
        if let Some(category) = options.category {
            if let Some(size) = t.scaled_point_size(category, options.settings) {
                field(&format!("point-size@{category}"), size.to_string());
            }
        }
        if let Some(case) = t.letter_case {
            field("letter-case", case.to_string());
        }
        let colors = [
            ("text-color", &t.text_color),
            ("disabled-text-color", &t.disabled_text_color),
            ("highlighted-text-color", &t.highlighted_text_color),
            ("selected-text-color", &t.selected_text_color),
            ("tint-color", &t.tint_color),
            ("background-color", &t.background_color),
        ];
        for (key, color) in colors {
            if let Some(color) = color {
                field(key, swatch(color));
            }
        }
        if let Some(spacing) = t.line_spacing {
            field("line-spacing", spacing.to_string());
        }
        if let Some(spacing) = t.letter_spacing {
            field("letter-spacing", spacing.to_string());
        }
        if let Some(alignment) = t.text_alignment {
            field("text-alignment", alignment.to_string());
        }
        if let Some(min) = t.minimum_point_size {
            field("minimum-point-size", min.to_string());
        }
        if let Some(max) = t.maximum_point_size {
            field("maximum-point-size", max.to_string());
        }
        if let Some(mode) = t.scaling_mode {
            field("scaling-mode", mode.to_string());
        }
    }

    for (name, error) in selected(resolution.errors(), options.style) {
        let _ = writeln!(out, "{}", error_line(name, error));
    }

    out
}

/// A single styled line describing a failed style.
pub fn error_line(name: &str, error: &StyleError) -> String {
    let marker = Style::new().red().bold().apply_to("error");
    format!("{marker}[{}] {name}: {error}", error.kind())
}

/// Summary printed by `check`.
pub fn check_summary(resolution: &Resolution) -> String {
    let resolved = resolution.styles().len();
    let failed = resolution.errors().len();
    let mut out = String::new();

    for (name, error) in resolution.errors() {
        let _ = writeln!(out, "{}", error_line(name, error));
    }

    let status = if failed == 0 {
        Style::new().green().apply_to("ok")
    } else {
        Style::new().red().apply_to("failed")
    };
    let _ = writeln!(out, "{status}: {resolved} resolved, {failed} failed");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use typestyle::TypographyConfig;

    fn resolution() -> Resolution {
        TypographyConfig::from_json_str(
            r##"{
                "ui-font-text-styles": {
                    "body": { "font-name": "Avenir", "point-size": 16, "text-color": "#FF0000" },
                    "caption": { "extends": "body", "letter-case": "upper" },
                    "broken": { "extends": "ghost" }
                }
            }"##,
        )
        .unwrap()
        .resolve()
    }

    fn options(settings: &TypographySettings) -> ShowOptions<'_> {
        ShowOptions {
            style: None,
            category: None,
            settings,
        }
    }

    #[test]
    fn test_text_output_lists_styles_and_errors() {
        let settings = TypographySettings::default();
        let text = show(&resolution(), &options(&settings), Format::Text).unwrap();
        let plain = console::strip_ansi_codes(&text);

        assert!(plain.contains("body\n"));
        assert!(plain.contains("caption\n"));
        assert!(plain.contains("#FF0000"));
        assert!(plain.contains("letter-case"));
        assert!(plain.contains("error[not-found] broken"));
    }

    #[test]
    fn test_text_output_filters_by_style() {
        let settings = TypographySettings::default();
        let opts = ShowOptions {
            style: Some("caption"),
            ..options(&settings)
        };
        let text = show(&resolution(), &opts, Format::Text).unwrap();
        let plain = console::strip_ansi_codes(&text);

        assert!(plain.starts_with("caption\n"));
        assert!(!plain.contains("broken"));
    }

    #[test]
    fn test_json_output_includes_scaled_size() {
        let settings = TypographySettings::default();
        let opts = ShowOptions {
            category: Some(ContentSizeCategory::ExtraLarge),
            ..options(&settings)
        };
        let json = show(&resolution(), &opts, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["styles"]["caption"]["font-name"], "Avenir");
        assert_eq!(value["styles"]["caption"]["letter-case"], "upper");
        assert_eq!(value["styles"]["caption"]["scaled-point-size"], 18.0);
        assert_eq!(value["errors"]["broken"]["kind"], "not-found");
        assert_eq!(value["errors"]["broken"]["target"], "ghost");
    }

    #[test]
    fn test_yaml_output_parses() {
        let settings = TypographySettings::default();
        let yaml = show(&resolution(), &options(&settings), Format::Yaml).unwrap();
        let value: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["styles"]["body"]["point-size"], 16.0);
    }

    #[test]
    fn test_check_summary() {
        let summary = check_summary(&resolution());
        let plain = console::strip_ansi_codes(&summary);
        assert!(plain.contains("failed: 2 resolved, 1 failed"));
    }
}
