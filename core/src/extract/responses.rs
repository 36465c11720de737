#![deny(missing_docs)]

//! # Responses
//!
//! Recovers a `responses` component. Three line triggers share one pass:
//!
//! - `> <code> ...` selects the current status code and resets its record.
//! - a fenced JSON block becomes the current code's `example`.
//! - `% code|meaning|schema|description` merges metadata into `code`'s record.
//!   Whitespace around `code` is ignored; the other columns are kept verbatim.
//!
//! By default a closing example fence replaces the whole record of the current
//! code, so metadata written before the example is lost. `ExtractOptions`
//! can switch that to a merge.

use crate::error::AppResult;
use crate::extract::models::{Response, Responses};
use crate::extract::ExtractOptions;
use crate::markdown::{non_empty_lines, pipe_tokens, FenceScanner, CODE_FENCE};
use tracing::warn;

/// Parses a `responses` component with default options.
pub fn extract_responses(source: &str) -> AppResult<Responses> {
    extract_responses_with_options(source, &ExtractOptions::default())
}

/// Parses a `responses` component.
///
/// Fails on the first example fence that is not valid JSON.
pub fn extract_responses_with_options(
    source: &str,
    options: &ExtractOptions,
) -> AppResult<Responses> {
    let mut responses = Responses::new();
    let mut current_code = String::new();
    let mut scanner = FenceScanner::new(CODE_FENCE);

    for line in non_empty_lines(source) {
        if line.starts_with('>') {
            current_code = line.split(' ').nth(1).unwrap_or_default().to_string();
            responses.insert(current_code.clone(), Response::default());
        }

        if let Some(block) = scanner.feed(line) {
            let example = serde_json::from_str(&block.body)?;
            if options.preserve_response_metadata {
                responses.entry(current_code.clone()).or_default().example = Some(example);
            } else {
                responses.insert(
                    current_code.clone(),
                    Response {
                        example: Some(example),
                        ..Response::default()
                    },
                );
            }
        }

        if let Some(metadata) = line.strip_prefix('%') {
            merge_metadata(&mut responses, metadata);
        }
    }
    scanner.finish();

    Ok(responses)
}

fn merge_metadata(responses: &mut Responses, metadata: &str) {
    let tokens = pipe_tokens(metadata);
    // `% 200|...` and `%200|...` address the same status code.
    let Some(code) = tokens
        .first()
        .map(|code| code.trim())
        .filter(|code| !code.is_empty())
    else {
        warn!(metadata, "skipping response metadata without a status code");
        return;
    };

    let column = |idx: usize| tokens.get(idx).map(|s| s.to_string());
    let record = responses.entry(code.to_string()).or_default();
    record.meaning = column(1);
    record.schema = column(2);
    record.description = column(3);
}
