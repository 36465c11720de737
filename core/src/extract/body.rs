#![deny(missing_docs)]

//! # Request Body
//!
//! Recovers a `body` component: a `type|url` line followed by JSON fences
//! labeled with their data format.

use crate::error::AppResult;
use crate::extract::models::{BodyEndpoint, RequestBody};
use crate::markdown::{lines, FenceScanner, CODE_FENCE};

/// Parses the endpoint line and every fenced JSON example.
///
/// Fails on the first fenced block that is not valid JSON.
pub fn extract_request_body(source: &str) -> AppResult<RequestBody> {
    let mut all_lines = lines(source);
    let endpoint = all_lines
        .next()
        .map(parse_endpoint_line)
        .unwrap_or_default();

    let mut body = RequestBody {
        endpoint,
        ..RequestBody::default()
    };

    let mut scanner = FenceScanner::new(CODE_FENCE);
    for line in all_lines {
        if let Some(block) = scanner.feed(line) {
            let value = serde_json::from_str(&block.body)?;
            body.formats.insert(block.label, value);
        }
    }
    scanner.finish();

    Ok(body)
}

fn parse_endpoint_line(line: &str) -> BodyEndpoint {
    let mut fields = line.trim().split('|');
    BodyEndpoint {
        method: fields.next().map(str::to_string),
        url: fields.next().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_endpoint_and_json_example() {
        let body = extract_request_body("POST|/users\n```json\n{\"name\":\"x\"}\n```\n").unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"endpoint": {"type": "POST", "url": "/users"}, "json": {"name": "x"}})
        );
    }

    #[test]
    fn test_endpoint_without_url() {
        let body = extract_request_body("PATCH\n").unwrap();
        assert_eq!(body.endpoint.method.as_deref(), Some("PATCH"));
        assert_eq!(body.endpoint.url, None);
        assert!(body.formats.is_empty());
    }

    #[test]
    fn test_endpoint_line_is_trimmed() {
        let body = extract_request_body("  PUT|/pets/{id}  \n").unwrap();
        assert_eq!(body.endpoint.method.as_deref(), Some("PUT"));
        assert_eq!(body.endpoint.url.as_deref(), Some("/pets/{id}"));
    }

    #[test]
    fn test_multiple_formats() {
        let source = "POST|/pets\n```json\n[1, 2]\n```\n```json+ld\n{\"@id\": \"p\"}\n```\n";
        let body = extract_request_body(source).unwrap();
        assert_eq!(body.formats["json"], json!([1, 2]));
        assert_eq!(body.formats["json+ld"], json!({"@id": "p"}));
    }

    #[test]
    fn test_malformed_json_fails() {
        let err = extract_request_body("POST|/users\n```json\n{name: x}\n```\n").unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_unterminated_fence_is_not_parsed() {
        let body = extract_request_body("POST|/users\n```json\n{broken\n").unwrap();
        assert!(body.formats.is_empty());
    }
}
