#![deny(missing_docs)]

//! # OASMD Core
//!
//! Converts an OpenAPI/Swagger description into per-endpoint records by
//! rendering it as marker-annotated markdown and scanning that markdown back.

/// Shared error types.
pub mod error;

/// Line and fence scanning primitives.
pub mod markdown;

/// Component extractors and endpoint assembly.
pub mod extract;

/// OpenAPI (OAS) loading and traversal.
pub mod oas;

/// Markdown generation from an API description.
pub mod render;

/// End-to-end conversion.
pub mod pipeline;

pub use error::{AppError, AppResult};
pub use extract::{
    parse_markdown_document, parse_markdown_document_with_options, Component, EndpointRecord,
    Endpoints, ExtractOptions,
};
pub use markdown::{scan_fences, FenceScanner, FencedBlock};
pub use oas::{load_api_description, read_spec_text};
pub use pipeline::{convert_spec_text, generate_markdown, retrieve_endpoints};
pub use render::{DocumentSource, MarkdownRenderer, RenderOptions, SampleLanguage};
