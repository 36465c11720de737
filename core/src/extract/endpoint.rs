#![deny(missing_docs)]

//! # Endpoint Assembly
//!
//! Splits a generated document on `####` headings and reads the `$$$`
//! component blocks of every endpoint segment.
//!
//! Within a segment the `name` block must close before any other component,
//! since it provides the key the remaining components are stored under.

use crate::error::{AppError, AppResult};
use crate::extract::models::{EndpointRecord, Endpoints};
use crate::extract::{Component, ComponentValue, ExtractOptions};
use crate::markdown::{lines, FenceScanner, COMPONENT_FENCE};
use tracing::debug;

/// Marker opening every endpoint segment.
pub const ENDPOINT_MARKER: &str = "####";

/// Parses a generated markdown document with default options.
pub fn parse_markdown_document(markdown: &str) -> AppResult<Endpoints> {
    parse_markdown_document_with_options(markdown, &ExtractOptions::default())
}

/// Parses a generated markdown document into endpoint records, keyed by name in document order.
///
/// Text before the first `####` is ignored. Fails on the first unknown
/// component, on a component preceding its endpoint's name, or on malformed JSON.
pub fn parse_markdown_document_with_options(
    markdown: &str,
    options: &ExtractOptions,
) -> AppResult<Endpoints> {
    let mut endpoints = Endpoints::new();

    for segment in markdown.trim().split(ENDPOINT_MARKER).skip(1) {
        parse_segment(segment, options, &mut endpoints)?;
    }

    debug!(endpoints = endpoints.len(), "parsed markdown document");
    Ok(endpoints)
}

fn parse_segment(
    segment: &str,
    options: &ExtractOptions,
    endpoints: &mut Endpoints,
) -> AppResult<()> {
    let mut endpoint_name: Option<String> = None;
    let mut scanner = FenceScanner::new(COMPONENT_FENCE);

    for line in lines(segment) {
        let Some(block) = scanner.feed(line) else {
            continue;
        };

        if block.label.is_empty() {
            continue;
        }

        let component: Component = block.label.parse()?;
        match component.extract(&block.body, options)? {
            ComponentValue::Name(name) => {
                debug!(endpoint = %name, "endpoint");
                // A repeated name replaces the earlier record in place.
                endpoints.insert(name.clone(), EndpointRecord::default());
                endpoint_name = Some(name);
            }
            value => {
                let record = endpoint_name
                    .as_ref()
                    .and_then(|name| endpoints.get_mut(name))
                    .ok_or_else(|| AppError::MissingEndpointName(component.to_string()))?;
                debug!(component = %component, "component");
                record.apply(value);
            }
        }
    }
    scanner.finish();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const TWO_ENDPOINTS: &str = "# Pets API

Preamble text.

#### GET /pets
$$$
List all pets.
$$$

$$$ name
listPets
$$$

$$$ parameters
limit|query|integer|false|How many
$$$

#### POST /pets
$$$ name
  createPet
$$$
$$$ body
POST|/pets
```json
{\"name\": \"Rex\"}
```
$$$
$$$ auth
api_key
$$$
";

    #[test]
    fn test_two_endpoints() {
        let endpoints = parse_markdown_document(TWO_ENDPOINTS).unwrap();
        let names: Vec<&String> = endpoints.keys().collect();
        assert_eq!(names, vec!["listPets", "createPet"]);

        let list = &endpoints["listPets"];
        assert_eq!(
            list.parameters.as_ref().unwrap()["limit"].description.as_deref(),
            Some("How many")
        );
        assert!(list.body.is_none());

        let create = &endpoints["createPet"];
        assert_eq!(
            create.body.as_ref().unwrap().formats["json"],
            json!({"name": "Rex"})
        );
        assert_eq!(create.auth.as_deref(), Some("api_key"));
    }

    #[test]
    fn test_preamble_only() {
        assert!(parse_markdown_document("# Title\nno endpoints here").unwrap().is_empty());
        assert!(parse_markdown_document("").unwrap().is_empty());
    }

    #[test]
    fn test_segment_without_components_yields_nothing() {
        let endpoints = parse_markdown_document("#### GET /health\nJust prose.").unwrap();
        assert!(endpoints.is_empty());
    }

    #[test]
    fn test_name_only_endpoint_has_empty_record() {
        let endpoints = parse_markdown_document("#### x\n$$$ name\nping\n$$$").unwrap();
        assert_eq!(endpoints["ping"], EndpointRecord::default());
    }

    #[test]
    fn test_unknown_component_fails() {
        let doc = "#### x\n$$$ name\nping\n$$$\n$$$ headers\nX-Rate: 1\n$$$";
        let err = parse_markdown_document(doc).unwrap_err();
        assert!(matches!(err, AppError::UnknownComponent(name) if name == "headers"));
    }

    #[test]
    fn test_component_before_name_fails() {
        let doc = "#### x\n$$$ auth\nNone\n$$$\n$$$ name\nping\n$$$";
        let err = parse_markdown_document(doc).unwrap_err();
        assert!(matches!(err, AppError::MissingEndpointName(c) if c == "auth"));
    }

    #[test]
    fn test_name_does_not_leak_across_segments() {
        let doc = "#### a\n$$$ name\nfirst\n$$$\n#### b\n$$$ auth\nNone\n$$$";
        let err = parse_markdown_document(doc).unwrap_err();
        assert!(matches!(err, AppError::MissingEndpointName(_)));
    }

    #[test]
    fn test_malformed_body_json_fails_whole_document() {
        let doc = "#### a\n$$$ name\nok\n$$$\n#### b\n$$$ name\nbad\n$$$\n$$$ body\nPOST|/x\n```json\n{nope}\n```\n$$$";
        let err = parse_markdown_document(doc).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_unterminated_component_discarded() {
        let doc = "#### a\n$$$ name\nok\n$$$\n$$$ auth\nNone\n";
        let endpoints = parse_markdown_document(doc).unwrap();
        assert_eq!(endpoints["ok"].auth, None);
    }

    #[test]
    fn test_repeated_name_replaces_record() {
        let doc = "#### a\n$$$ name\ndup\n$$$\n$$$ auth\nfirst\n$$$\n#### b\n$$$ name\ndup\n$$$";
        let endpoints = parse_markdown_document(doc).unwrap();
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints["dup"].auth, None);
    }

    #[test]
    fn test_options_reach_responses_extractor() {
        let doc = "#### a\n$$$ name\nget\n$$$\n$$$ responses\n> 200 Response\n% 200|OK|Pet|Fine\n```json\n{}\n```\n$$$";
        let default = parse_markdown_document(doc).unwrap();
        assert_eq!(default["get"].responses.as_ref().unwrap()["200"].meaning, None);

        let options = ExtractOptions {
            preserve_response_metadata: true,
        };
        let merged = parse_markdown_document_with_options(doc, &options).unwrap();
        assert_eq!(
            merged["get"].responses.as_ref().unwrap()["200"].meaning.as_deref(),
            Some("OK")
        );
    }
}
