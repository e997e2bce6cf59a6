//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use typestyle::ContentSizeCategory;

/// Check and preview typography style configuration files.
#[derive(Debug, Parser)]
#[command(name = "typestyle", version, about)]
pub struct Cli {
    /// Log resolution details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve every style and report the ones that fail
    Check {
        /// Configuration file (.json, .yaml or .yml)
        file: PathBuf,
    },
    /// Print resolved styles
    Show {
        /// Configuration file (.json, .yaml or .yml)
        file: PathBuf,

        /// Only show this style
        #[arg(short, long)]
        style: Option<String>,

        /// Include the point size scaled for this content size category
        #[arg(short, long, value_parser = parse_category)]
        category: Option<ContentSizeCategory>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml,
}

fn parse_category(s: &str) -> Result<ContentSizeCategory, String> {
    s.parse().map_err(|e: typestyle::UnknownToken| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["typestyle", "check", "styles.json"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Command::Check { file } => assert_eq!(file, PathBuf::from("styles.json")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_with_options() {
        let cli = Cli::try_parse_from([
            "typestyle",
            "show",
            "styles.yaml",
            "--style",
            "body",
            "--category",
            "xxl",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Show {
                style,
                category,
                format,
                ..
            } => {
                assert_eq!(style.as_deref(), Some("body"));
                assert_eq!(category, Some(ContentSizeCategory::ExtraExtraLarge));
                assert_eq!(format, Format::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_show_defaults_to_text() {
        let cli = Cli::try_parse_from(["typestyle", "show", "s.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Show {
                format: Format::Text,
                category: None,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let result = Cli::try_parse_from(["typestyle", "show", "s.json", "--category", "huge"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Cli::try_parse_from(["typestyle"]).is_err());
    }
}
