#![deny(missing_docs)]

//! # Render Command
//!
//! Writes the intermediate markdown for a spec, without parsing it back.

use std::path::PathBuf;

use oasmd_core::{generate_markdown, read_spec_text, AppResult};

use crate::output::write_text;

/// Arguments for the render command.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Spec location: `http(s)://` URL or local path (YAML or JSON).
    #[clap(long, env = "OASMD_INPUT")]
    pub input: String,

    /// Write to this file instead of stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

/// Executes the rendering.
pub fn execute(args: &RenderArgs) -> AppResult<()> {
    let text = read_spec_text(&args.input)?;
    let markdown = generate_markdown(&text)?;
    write_text(args.output.as_deref(), &markdown)
}
