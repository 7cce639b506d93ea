use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figma_tokens::{build, extract_tokens, source, Config};
use tracing_subscriber::EnvFilter;

/// Extract design tokens from a Figma file and compile them to stylesheets.
#[derive(Parser, Debug)]
#[command(name = "figma-tokens", version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./figma-tokens.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Saved Figma file response to read instead of calling the API
    #[arg(short, long, global = true)]
    document: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract tokens and write the stylesheet files
    Build {
        /// Overrides `output_folder`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract tokens and print them as JSON
    Extract,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    dotenvy::dotenv().ok();
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let source = source::resolve(cli.document.as_deref(), &config.figma)?;

    match cli.command {
        Command::Build { output } => {
            if let Some(output) = output {
                config.output_folder = output;
            }
            let written = build(source.as_ref(), &config)?;
            tracing::info!(files = written.len(), "Build complete");
        }
        Command::Extract => {
            let tokens = extract_tokens(source.as_ref(), &config.categories)?;
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_is_a_build_flag() {
        let cli = Cli::try_parse_from(["figma-tokens", "-d", "file.json", "build", "-o", "out"]).unwrap();
        assert_eq!(cli.document, Some(PathBuf::from("file.json")));
        assert!(matches!(cli.command, Command::Build { output: Some(output) } if output == PathBuf::from("out")));

        assert!(Cli::try_parse_from(["figma-tokens", "extract", "--output", "out"]).is_err());
    }
}
