mod cli;
mod output;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use typestyle::TypographyConfig;

use crate::cli::{Cli, Command};
use crate::output::ShowOptions;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &std::path::Path) -> anyhow::Result<TypographyConfig> {
    TypographyConfig::from_path(path)
        .with_context(|| format!("could not load configuration from {}", path.display()))
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Check { file } => {
            let config = load(&file)?;
            let resolution = config.resolve();
            tracing::debug!(
                file = %file.display(),
                styles = config.styles.len(),
                colors = config.colors.len(),
                "checked configuration"
            );
            print!("{}", output::check_summary(&resolution));
            Ok(if resolution.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::Show {
            file,
            style,
            category,
            format,
        } => {
            let config = load(&file)?;
            let resolution = config.resolve();

            if let Some(name) = style.as_deref() {
                if !config.styles.contains(name) {
                    anyhow::bail!("no style named '{name}' in {}", file.display());
                }
            }

            let options = ShowOptions {
                style: style.as_deref(),
                category,
                settings: &config.settings,
            };
            print!("{}", output::show(&resolution, &options, format)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", console::style("error:").red().bold());
            ExitCode::from(2)
        }
    }
}
