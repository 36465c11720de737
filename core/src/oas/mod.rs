#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **source**: Reading, fetching and parsing the specification text.
//! - **ref_utils**: Local `$ref` resolution.
//! - **sampler**: Example synthesis from schemas.
//! - **operations**: Walking `paths` into per-operation views (OAS 3.x and Swagger 2.0).

pub mod operations;
pub mod ref_utils;
pub mod sampler;
pub mod source;

pub use operations::{collect_operations, Operation};
pub use sampler::sample_schema;
pub use source::{fetch_spec_text, is_remote, load_api_description, read_spec_text};
