#![deny(missing_docs)]

//! # Extract Command
//!
//! Reads or fetches a spec, renders it and parses the result into endpoint records.

use oasmd_core::{retrieve_endpoints, AppResult, ExtractOptions};

use crate::output::JsonOutputArgs;

/// Arguments for the extract command.
#[derive(clap::Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Spec location: `http(s)://` URL or local path (YAML or JSON).
    #[clap(long, env = "OASMD_INPUT")]
    pub input: String,

    /// Output options.
    #[clap(flatten)]
    pub json: JsonOutputArgs,

    /// Keep `%` metadata written before a response example.
    #[clap(long)]
    pub preserve_response_metadata: bool,
}

/// Executes the extraction.
pub fn execute(args: &ExtractArgs) -> AppResult<()> {
    let options = ExtractOptions {
        preserve_response_metadata: args.preserve_response_metadata,
    };
    let endpoints = retrieve_endpoints(&args.input, &options)?;
    args.json.write(&serde_json::to_value(&endpoints)?)
}
