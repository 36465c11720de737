#![deny(missing_docs)]

//! # Example Sampling
//!
//! Builds an example payload from a Schema Object when the description does
//! not carry one.
//!
//! Explicit values win, in order: `example`, first of `examples`, `default`,
//! `const`, first of `enum`. Otherwise the value is synthesized from the
//! schema's shape.

use crate::oas::ref_utils::{ref_target, resolve};
use serde_json::{Map, Value};

const MAX_DEPTH: usize = 8;

/// Produces an example value for `schema`, resolving local references against `api`.
pub fn sample_schema(api: &Value, schema: &Value) -> Value {
    sample(api, schema, 0)
}

fn sample(api: &Value, schema: &Value, depth: usize) -> Value {
    if depth > MAX_DEPTH {
        return Value::Null;
    }

    if ref_target(schema).is_some() {
        return match resolve(api, schema) {
            Some(target) => sample(api, target, depth + 1),
            None => Value::Null,
        };
    }

    if let Some(explicit) = explicit_value(schema) {
        return explicit.clone();
    }

    if let Some(all_of) = schema.get("allOf").and_then(Value::as_array) {
        let mut merged = Map::new();
        for part in all_of {
            match sample(api, part, depth + 1) {
                Value::Object(fields) => merged.extend(fields),
                other if merged.is_empty() && all_of.len() == 1 => return other,
                _ => {}
            }
        }
        return Value::Object(merged);
    }

    for key in ["oneOf", "anyOf"] {
        if let Some(first) = schema
            .get(key)
            .and_then(Value::as_array)
            .and_then(|variants| variants.first())
        {
            return sample(api, first, depth + 1);
        }
    }

    match schema_type(schema) {
        Some("object") => sample_object(api, schema, depth),
        Some("array") => {
            let item = schema
                .get("items")
                .map(|items| sample(api, items, depth + 1))
                .unwrap_or(Value::Null);
            Value::Array(vec![item])
        }
        Some("string") => Value::String(sample_string(schema)),
        Some("integer") | Some("number") => schema
            .get("minimum")
            .filter(|min| min.is_number())
            .cloned()
            .unwrap_or_else(|| Value::from(0)),
        Some("boolean") => Value::Bool(true),
        _ => Value::Null,
    }
}

fn explicit_value(schema: &Value) -> Option<&Value> {
    schema
        .get("example")
        .or_else(|| {
            schema
                .get("examples")
                .and_then(Value::as_array)
                .and_then(|values| values.first())
        })
        .or_else(|| schema.get("default"))
        .or_else(|| schema.get("const"))
        .or_else(|| {
            schema
                .get("enum")
                .and_then(Value::as_array)
                .and_then(|values| values.first())
        })
}

/// The declared type, picking the first non-null entry of a type array (OAS 3.1).
///
/// A schema with `properties` but no `type` is an object.
fn schema_type(schema: &Value) -> Option<&str> {
    match schema.get("type") {
        Some(Value::String(ty)) => Some(ty.as_str()),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|ty| *ty != "null")
            .or(Some("null")),
        _ if schema.get("properties").is_some() => Some("object"),
        _ => None,
    }
}

fn sample_object(api: &Value, schema: &Value, depth: usize) -> Value {
    let mut fields = Map::new();
    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (name, property) in properties {
            let write_only = resolve(api, property)
                .and_then(|p| p.get("writeOnly"))
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if write_only {
                continue;
            }
            fields.insert(name.clone(), sample(api, property, depth + 1));
        }
    }
    Value::Object(fields)
}

fn sample_string(schema: &Value) -> String {
    let format = schema.get("format").and_then(Value::as_str).unwrap_or("");
    match format {
        "date-time" => "2019-08-24T14:15:22Z",
        "date" => "2019-08-24",
        "time" => "14:15:22Z",
        "email" => "user@example.com",
        "uuid" => "497f6eca-6276-4993-bfeb-53cbbbba6f08",
        "uri" | "url" => "http://example.com",
        "hostname" => "example.com",
        "ipv4" => "192.168.0.1",
        "ipv6" => "::1",
        "byte" => "U3dhZ2dlciByb2Nrcw==",
        "password" => "pa$$word",
        _ => "string",
    }
    .to_string()
}
