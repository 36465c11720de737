#![deny(missing_docs)]

//! # Parse Command
//!
//! Parses an already rendered markdown document into endpoint records.

use std::fs;
use std::path::PathBuf;

use oasmd_core::{parse_markdown_document_with_options, AppResult, ExtractOptions};
use tracing::info;

use crate::output::JsonOutputArgs;

/// Arguments for the parse command.
#[derive(clap::Args, Debug, Clone)]
pub struct ParseArgs {
    /// Path to the markdown document.
    #[clap(long)]
    pub markdown: PathBuf,

    /// Output options.
    #[clap(flatten)]
    pub json: JsonOutputArgs,

    /// Keep `%` metadata written before a response example.
    #[clap(long)]
    pub preserve_response_metadata: bool,
}

/// Executes the parse.
pub fn execute(args: &ParseArgs) -> AppResult<()> {
    let markdown = fs::read_to_string(&args.markdown)?;
    info!(path = %args.markdown.display(), "parsing markdown");
    let options = ExtractOptions {
        preserve_response_metadata: args.preserve_response_metadata,
    };
    let endpoints = parse_markdown_document_with_options(&markdown, &options)?;
    args.json.write(&serde_json::to_value(&endpoints)?)
}
