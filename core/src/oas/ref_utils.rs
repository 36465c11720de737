#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Shared helpers for resolving local `$ref` targets inside an API description.
//!
//! These utilities are intentionally lightweight: they never fetch external documents.
//! A reference whose document part matches the description's `$self` URI is
//! treated as local.

use percent_encoding::percent_decode_str;
use serde_json::Value;
use url::Url;

/// Returns the `$ref` string of an object, if it is a reference object.
pub fn ref_target(value: &Value) -> Option<&str> {
    value.get("$ref").and_then(Value::as_str)
}

/// Follows `$ref` chains until a non-reference object is reached.
///
/// Returns `None` for external or dangling references. Chains longer than
/// a few hops are treated as cycles.
pub fn resolve<'a>(api: &'a Value, value: &'a Value) -> Option<&'a Value> {
    let mut current = value;
    for _ in 0..8 {
        match ref_target(current) {
            Some(target) => current = resolve_pointer(api, target)?,
            None => return Some(current),
        }
    }
    None
}

/// Resolves a local reference (`#/a/b`) against the description root.
pub fn resolve_pointer<'a>(api: &'a Value, ref_str: &str) -> Option<&'a Value> {
    let local = normalize_ref_to_local(ref_str, self_uri(api))?;
    let pointer = local.trim_start_matches('#').trim_start_matches('/');
    if pointer.is_empty() {
        return Some(api);
    }

    pointer.split('/').try_fold(api, |node, raw| {
        let segment = decode_pointer_segment(raw);
        match node {
            Value::Object(map) => map.get(&segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    })
}

/// Extracts the display name of a reference: its last pointer segment, decoded.
///
/// e.g. `#/components/schemas/User` -> `User`
pub fn ref_name(ref_str: &str) -> Option<String> {
    let (_, fragment) = ref_str.rsplit_once('#').unwrap_or(("", ref_str));
    let last = fragment.rsplit('/').next()?;
    let name = decode_pointer_segment(last);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

fn self_uri(api: &Value) -> Option<&str> {
    api.get("$self").and_then(Value::as_str)
}

fn normalize_ref_to_local(ref_str: &str, self_uri: Option<&str>) -> Option<String> {
    if ref_str.starts_with('#') {
        return Some(ref_str.to_string());
    }

    let (document, fragment) = ref_str.split_once('#')?;
    if ref_doc_matches_self(document, self_uri?) {
        return Some(format!("#{}", fragment));
    }
    None
}

fn ref_doc_matches_self(ref_doc: &str, self_uri: &str) -> bool {
    if ref_doc == self_uri {
        return true;
    }

    match (Url::parse(ref_doc), Url::parse(self_uri)) {
        (Ok(ref_url), Ok(self_url)) => {
            ref_url.scheme() == self_url.scheme()
                && ref_url.host() == self_url.host()
                && ref_url.port() == self_url.port()
                && ref_url.path() == self_url.path()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api() -> Value {
        json!({
            "$self": "https://example.com/openapi.yaml",
            "components": {
                "schemas": {
                    "Pet": {"type": "object"},
                    "Alias": {"$ref": "#/components/schemas/Pet"},
                    "Loop": {"$ref": "#/components/schemas/Loop"},
                    "a/b": {"type": "string"}
                }
            },
            "definitions": {"Legacy": {"type": "integer"}}
        })
    }

    #[test]
    fn test_resolve_local_pointer() {
        let api = api();
        let node = resolve_pointer(&api, "#/components/schemas/Pet").unwrap();
        assert_eq!(node["type"], "object");
        assert!(resolve_pointer(&api, "#/components/schemas/Missing").is_none());
    }

    #[test]
    fn test_resolve_follows_chains_and_stops_on_cycles() {
        let api = api();
        let alias = json!({"$ref": "#/components/schemas/Alias"});
        assert_eq!(resolve(&api, &alias).unwrap()["type"], "object");

        let looped = json!({"$ref": "#/components/schemas/Loop"});
        assert!(resolve(&api, &looped).is_none());
    }

    #[test]
    fn test_escaped_segments() {
        let api = api();
        let node = resolve_pointer(&api, "#/components/schemas/a~1b").unwrap();
        assert_eq!(node["type"], "string");
        assert_eq!(decode_pointer_segment("My%20Schema"), "My Schema");
    }

    #[test]
    fn test_self_absolute_reference() {
        let api = api();
        let node =
            resolve_pointer(&api, "https://example.com/openapi.yaml#/definitions/Legacy").unwrap();
        assert_eq!(node["type"], "integer");
        assert!(resolve_pointer(&api, "https://other.org/spec.yaml#/definitions/Legacy").is_none());
    }

    #[test]
    fn test_ref_name() {
        assert_eq!(ref_name("#/components/schemas/User").as_deref(), Some("User"));
        assert_eq!(ref_name("#/definitions/Pet~1Cat").as_deref(), Some("Pet/Cat"));
        assert_eq!(ref_name("other.yaml#/components/schemas/Tag").as_deref(), Some("Tag"));
        assert_eq!(ref_name("#/"), None);
    }
}
