#![deny(missing_docs)]

//! # OASMD CLI
//!
//! Command Line Interface for the OpenAPI -> markdown -> endpoint records pipeline.
//!
//! Supported Commands:
//! - `extract`: Full pipeline from a spec file or URL to JSON records.
//! - `render`: Spec to intermediate markdown only.
//! - `parse`: Existing markdown document to JSON records.

use clap::{Parser, Subcommand};
use oasmd_core::AppResult;
use tracing_subscriber::EnvFilter;

mod extract;
mod output;
mod parse;
mod render;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI to endpoint records")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an OpenAPI/Swagger description into endpoint records.
    Extract(extract::ExtractArgs),
    /// Render an OpenAPI/Swagger description as annotated markdown.
    Render(render::RenderArgs),
    /// Parse an annotated markdown document into endpoint records.
    Parse(parse::ParseArgs),
}

fn main() -> AppResult<()> {
    // Logs go to stderr; stdout carries the command output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Extract(args) => extract::execute(args)?,
        Commands::Render(args) => render::execute(args)?,
        Commands::Parse(args) => parse::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract_flags() {
        let cli = Cli::try_parse_from([
            "oasmd",
            "extract",
            "--input",
            "spec.yaml",
            "--compact",
            "--preserve-response-metadata",
        ])
        .unwrap();
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.input, "spec.yaml");
                assert!(args.json.compact);
                assert!(args.preserve_response_metadata);
                assert_eq!(args.json.output, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
