#![deny(missing_docs)]

//! # Parameters
//!
//! Recovers a `parameters` component made of `name|in|type|required|description` lines.

use crate::extract::models::{Parameter, Parameters};
use crate::markdown::{non_empty_lines, pipe_tokens};
use tracing::warn;

/// Reads one parameter per non-empty line.
///
/// Columns are positional and kept verbatim; short lines leave trailing slots empty.
pub fn extract_parameters(source: &str) -> Parameters {
    let mut parameters = Parameters::new();

    for line in non_empty_lines(source) {
        let tokens = pipe_tokens(line);
        let Some(name) = tokens.first() else {
            warn!(line, "skipping parameter line without a name");
            continue;
        };

        let column = |idx: usize| tokens.get(idx).map(|s| s.to_string());
        parameters.insert(
            name.to_string(),
            Parameter {
                location: column(1),
                ty: column(2),
                required: column(3),
                description: column(4),
            },
        );
    }

    parameters
}
