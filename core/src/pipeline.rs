#![deny(missing_docs)]

//! # Pipeline
//!
//! `read/fetch -> render markdown -> parse`, joined with `?`: the first failing
//! stage ends the conversion and its error is returned unchanged.

use crate::error::AppResult;
use crate::extract::{parse_markdown_document_with_options, Endpoints, ExtractOptions};
use crate::oas::{load_api_description, read_spec_text};
use crate::render::{DocumentSource, MarkdownRenderer, RenderOptions};
use tracing::info;

/// Renders specification text (YAML or JSON) with the built-in renderer.
pub fn generate_markdown(text: &str) -> AppResult<String> {
    let api = load_api_description(text)?;
    MarkdownRenderer::new(RenderOptions::default()).render(&api)
}

/// Converts specification text into endpoint records using `source` to render it.
pub fn convert_spec_text<S: DocumentSource + ?Sized>(
    text: &str,
    source: &S,
    options: &ExtractOptions,
) -> AppResult<Endpoints> {
    let api = load_api_description(text)?;
    let markdown = source.render(&api)?;
    parse_markdown_document_with_options(&markdown, options)
}

/// Reads or fetches the description at `location` and converts it with the built-in renderer.
pub fn retrieve_endpoints(location: &str, options: &ExtractOptions) -> AppResult<Endpoints> {
    let text = read_spec_text(location)?;
    let endpoints = convert_spec_text(
        &text,
        &MarkdownRenderer::new(RenderOptions::default()),
        options,
    )?;
    info!(location, endpoints = endpoints.len(), "retrieved endpoints");
    Ok(endpoints)
}
