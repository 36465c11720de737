#![deny(missing_docs)]

//! # Operations
//!
//! Read-only views over the operations of an API description, normalizing the
//! differences between OpenAPI 3.x and Swagger 2.0 that matter for rendering:
//!
//! - Parameters: path-level and operation-level lists merged; Swagger 2.0 keeps
//!   the type on the parameter, OAS 3.x under `schema`.
//! - Request body: `requestBody.content` (OAS 3.x) or the `in: body` parameter (Swagger 2.0).
//! - Responses: `content` (OAS 3.x) or `schema`/`examples` (Swagger 2.0).
//! - Base URL: `servers` (OAS 3.x) or `schemes`/`host`/`basePath` (Swagger 2.0).

use crate::oas::ref_utils::{ref_name, ref_target, resolve};
use crate::oas::sampler::sample_schema;
use serde_json::{Map, Value};

/// HTTP methods recognized as operations of a Path Item, in rendering order.
pub const METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// One operation of the description.
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
    /// Upper-case HTTP method.
    pub method: &'static str,
    /// Path template (e.g. `/pets/{id}`).
    pub path: &'a str,
    /// The Operation Object.
    pub operation: &'a Value,
    /// The enclosing Path Item Object (references already resolved).
    pub path_item: &'a Value,
}

/// A parameter, flattened for table rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterView {
    /// Parameter name.
    pub name: String,
    /// Location (`path`, `query`, `header`, `cookie`, `body`, `formData`).
    pub location: String,
    /// Display type, e.g. `string`, `integer(int64)`, `[Pet]`.
    pub ty: String,
    /// Required flag.
    pub required: bool,
    /// Description text.
    pub description: String,
}

/// The request body of an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    /// Selected media type.
    pub content_type: String,
    /// Example payload when the media type is JSON-like.
    pub example: Option<Value>,
}

/// One entry of the Responses Object.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseView {
    /// Status code key (`200`, `4XX`, `default`).
    pub code: String,
    /// Description text.
    pub description: String,
    /// Schema display name: the `$ref` name, `Inline`, or `None`.
    pub schema: String,
    /// Example payload when the media type is JSON-like.
    pub example: Option<Value>,
}

/// One operation inside a callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackView {
    /// Callback name.
    pub name: String,
    /// Runtime expression keying the callback path item.
    pub expression: String,
    /// Upper-case HTTP method.
    pub method: String,
}

/// A security requirement: scheme name and scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementView {
    /// Security scheme name.
    pub scheme: String,
    /// Requested scopes.
    pub scopes: Vec<String>,
}

/// Lists every operation under `paths`, in document order.
pub fn collect_operations(api: &Value) -> Vec<Operation<'_>> {
    let mut operations = Vec::new();
    let Some(paths) = api.get("paths").and_then(Value::as_object) else {
        return operations;
    };

    for (path, item) in paths {
        if path.starts_with("x-") {
            continue;
        }
        let Some(path_item) = resolve(api, item) else {
            continue;
        };
        for method in METHODS {
            if let Some(operation) = path_item.get(method).filter(|op| op.is_object()) {
                operations.push(Operation {
                    method: upper(method),
                    path,
                    operation,
                    path_item,
                });
            }
        }
    }

    operations
}

/// Returns true for Swagger 2.0 documents.
pub fn is_swagger2(api: &Value) -> bool {
    api.get("swagger").is_some() && api.get("openapi").is_none()
}

/// The base URL operations are served from, without a trailing slash.
///
/// Empty when the description names no server.
pub fn base_url(api: &Value) -> String {
    if is_swagger2(api) {
        let Some(host) = api.get("host").and_then(Value::as_str) else {
            return api_str(api, "basePath").trim_end_matches('/').to_string();
        };
        let scheme = api
            .get("schemes")
            .and_then(Value::as_array)
            .and_then(|s| s.first())
            .and_then(Value::as_str)
            .unwrap_or("https");
        let base = format!("{}://{}{}", scheme, host, api_str(api, "basePath"));
        return base.trim_end_matches('/').to_string();
    }

    let Some(server) = api
        .get("servers")
        .and_then(Value::as_array)
        .and_then(|s| s.first())
    else {
        return String::new();
    };

    let mut url = api_str(server, "url").to_string();
    if let Some(variables) = server.get("variables").and_then(Value::as_object) {
        for (name, variable) in variables {
            let default = api_str(variable, "default");
            url = url.replace(&format!("{{{}}}", name), default);
        }
    }
    url.trim_end_matches('/').to_string()
}

/// Returns true for `application/json` and `+json` media types.
pub fn is_json_media(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    essence == "application/json" || essence.ends_with("+json") || essence == "*/*"
}

impl<'a> Operation<'a> {
    /// The endpoint key: `operationId`, else `METHOD path`.
    pub fn name(&self) -> String {
        match self.operation.get("operationId").and_then(Value::as_str) {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => format!("{} {}", self.method, self.path),
        }
    }

    /// The first tag, used for grouping.
    pub fn first_tag(&self) -> Option<&'a str> {
        self.operation
            .get("tags")
            .and_then(Value::as_array)
            .and_then(|tags| tags.first())
            .and_then(Value::as_str)
    }

    /// Summary and description prose, operation first then path item.
    pub fn prose(&self) -> Vec<&'a str> {
        let mut prose = Vec::new();
        for key in ["summary", "description"] {
            let text = self
                .operation
                .get(key)
                .or_else(|| self.path_item.get(key))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|t| !t.is_empty());
            if let Some(text) = text {
                prose.push(text);
            }
        }
        prose
    }

    /// Path-level and operation-level parameters; the operation wins on `name` + `in`.
    pub fn parameters(&self, api: &'a Value) -> Vec<ParameterView> {
        let mut merged: Vec<&'a Value> = Vec::new();
        for source in [self.path_item, self.operation] {
            let Some(list) = source.get("parameters").and_then(Value::as_array) else {
                continue;
            };
            for raw in list {
                let Some(param) = resolve(api, raw) else {
                    continue;
                };
                let key = (param.get("name"), param.get("in"));
                merged.retain(|existing| (existing.get("name"), existing.get("in")) != key);
                merged.push(param);
            }
        }

        merged
            .into_iter()
            .map(|param| {
                let location = api_str(param, "in").to_string();
                let schema = param.get("schema");
                let ty = match schema {
                    Some(schema) => display_type(schema),
                    None => display_type(param),
                };
                ParameterView {
                    name: api_str(param, "name").to_string(),
                    required: location == "path"
                        || param.get("required").and_then(Value::as_bool).unwrap_or(false),
                    location,
                    ty,
                    description: api_str(param, "description").to_string(),
                }
            })
            .collect()
    }

    /// The request body, when the operation declares one.
    pub fn request_body(&self, api: &'a Value) -> Option<BodyView> {
        if is_swagger2(api) {
            let body_param = self
                .parameters_raw(api)
                .into_iter()
                .find(|p| p.get("in").and_then(Value::as_str) == Some("body"))?;
            let content_type = self
                .media_list(api, "consumes")
                .into_iter()
                .next()
                .unwrap_or_else(|| "application/json".to_string());
            let example = body_param
                .get("schema")
                .filter(|_| is_json_media(&content_type))
                .map(|schema| sample_schema(api, schema));
            return Some(BodyView {
                content_type,
                example,
            });
        }

        let body = resolve(api, self.operation.get("requestBody")?)?;
        let content = body.get("content").and_then(Value::as_object)?;
        let (content_type, media) = pick_media(content)?;
        let example = if is_json_media(content_type) {
            media_example(api, media)
        } else {
            None
        };
        Some(BodyView {
            content_type: content_type.clone(),
            example,
        })
    }

    /// Every response, in document order.
    pub fn responses(&self, api: &'a Value) -> Vec<ResponseView> {
        let Some(responses) = self.operation.get("responses").and_then(Value::as_object) else {
            return Vec::new();
        };

        let swagger2 = is_swagger2(api);
        responses
            .iter()
            .filter(|(code, _)| !code.starts_with("x-"))
            .filter_map(|(code, raw)| {
                let response = resolve(api, raw)?;
                let description = api_str(response, "description").to_string();
                let (schema, example) = if swagger2 {
                    swagger2_response(api, response, &self.media_list(api, "produces"))
                } else {
                    oas3_response(api, response)
                };
                Some(ResponseView {
                    code: code.clone(),
                    description,
                    schema,
                    example,
                })
            })
            .collect()
    }

    /// Operations declared under `callbacks`.
    pub fn callbacks(&self, api: &'a Value) -> Vec<CallbackView> {
        let mut views = Vec::new();
        let Some(callbacks) = self.operation.get("callbacks").and_then(Value::as_object) else {
            return views;
        };

        for (name, raw) in callbacks {
            let Some(callback) = resolve(api, raw).and_then(Value::as_object) else {
                continue;
            };
            for (expression, item) in callback {
                let Some(item) = resolve(api, item) else {
                    continue;
                };
                for method in METHODS {
                    if item.get(method).is_some() {
                        views.push(CallbackView {
                            name: name.clone(),
                            expression: expression.clone(),
                            method: upper(method).to_string(),
                        });
                    }
                }
            }
        }
        views
    }

    /// Effective security requirements; the operation list replaces the global one.
    ///
    /// Empty when no authentication applies.
    pub fn security(&self, api: &'a Value) -> Vec<RequirementView> {
        let requirements = self
            .operation
            .get("security")
            .or_else(|| api.get("security"))
            .and_then(Value::as_array);

        let mut views = Vec::new();
        for requirement in requirements.into_iter().flatten() {
            let Some(map) = requirement.as_object() else {
                continue;
            };
            for (scheme, scopes) in map {
                let scopes: Vec<String> = scopes
                    .as_array()
                    .map(|s| s.iter().filter_map(Value::as_str).map(str::to_string).collect())
                    .unwrap_or_default();
                views.push(RequirementView {
                    scheme: scheme.clone(),
                    scopes,
                });
            }
        }
        views
    }

    /// Media types accepted in responses, for the `Accept` header of samples.
    pub fn accept(&self, api: &'a Value) -> Option<String> {
        if is_swagger2(api) {
            return self.media_list(api, "produces").into_iter().next();
        }
        self.responses_content_types(api).into_iter().next()
    }

    fn responses_content_types(&self, api: &'a Value) -> Vec<String> {
        let Some(responses) = self.operation.get("responses").and_then(Value::as_object) else {
            return Vec::new();
        };
        let mut types = Vec::new();
        for raw in responses.values() {
            let content = resolve(api, raw)
                .and_then(|r| r.get("content"))
                .and_then(Value::as_object);
            for content_type in content.into_iter().flat_map(Map::keys) {
                if !types.contains(content_type) {
                    types.push(content_type.clone());
                }
            }
        }
        types
    }

    fn parameters_raw(&self, api: &'a Value) -> Vec<&'a Value> {
        [self.path_item, self.operation]
            .into_iter()
            .filter_map(|source| source.get("parameters").and_then(Value::as_array))
            .flatten()
            .filter_map(|raw| resolve(api, raw))
            .collect()
    }

    /// Swagger 2.0 `consumes`/`produces`, operation first then global.
    fn media_list(&self, api: &'a Value, key: &str) -> Vec<String> {
        self.operation
            .get(key)
            .or_else(|| api.get(key))
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(Value::as_str).map(str::to_string).collect())
            .unwrap_or_default()
    }
}

fn oas3_response(api: &Value, response: &Value) -> (String, Option<Value>) {
    let Some((content_type, media)) = response
        .get("content")
        .and_then(Value::as_object)
        .and_then(pick_media)
    else {
        return ("None".to_string(), None);
    };

    let schema = media
        .get("schema")
        .map(schema_name)
        .unwrap_or_else(|| "None".to_string());
    let example = if is_json_media(content_type) {
        media_example(api, media)
    } else {
        None
    };
    (schema, example)
}

fn swagger2_response(api: &Value, response: &Value, produces: &[String]) -> (String, Option<Value>) {
    let Some(schema) = response.get("schema") else {
        return ("None".to_string(), None);
    };

    let json_produced = produces.is_empty() || produces.iter().any(|p| is_json_media(p));
    let example = response
        .get("examples")
        .and_then(Value::as_object)
        .and_then(|examples| {
            examples
                .iter()
                .find(|(media, _)| is_json_media(media))
                .map(|(_, value)| value.clone())
        })
        .or_else(|| json_produced.then(|| sample_schema(api, schema)));
    (schema_name(schema), example)
}

/// Prefers a JSON-like media type, falling back to the first entry.
fn pick_media(content: &Map<String, Value>) -> Option<(&String, &Value)> {
    content
        .iter()
        .find(|(content_type, _)| is_json_media(content_type))
        .or_else(|| content.iter().next())
}

/// Media Type Object example: `example`, first of `examples`, else sampled from `schema`.
fn media_example(api: &Value, media: &Value) -> Option<Value> {
    if let Some(example) = media.get("example") {
        return Some(example.clone());
    }
    if let Some(first) = media
        .get("examples")
        .and_then(Value::as_object)
        .and_then(|examples| examples.values().next())
    {
        if let Some(value) = resolve(api, first).and_then(|e| e.get("value")) {
            return Some(value.clone());
        }
    }
    media.get("schema").map(|schema| sample_schema(api, schema))
}

fn schema_name(schema: &Value) -> String {
    if let Some(name) = ref_target(schema).and_then(ref_name) {
        return name;
    }
    if let Some(item_name) = schema
        .get("items")
        .and_then(ref_target)
        .and_then(ref_name)
    {
        return format!("[{}]", item_name);
    }
    "Inline".to_string()
}

/// Type column of the parameter table.
fn display_type(schema: &Value) -> String {
    if let Some(name) = ref_target(schema).and_then(ref_name) {
        return name;
    }

    let ty = match schema.get("type") {
        Some(Value::String(ty)) => ty.clone(),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|ty| *ty != "null")
            .unwrap_or("null")
            .to_string(),
        _ => return "any".to_string(),
    };

    if ty == "array" {
        let item = schema
            .get("items")
            .map(display_type)
            .unwrap_or_else(|| "any".to_string());
        return format!("[{}]", item);
    }

    match schema.get("format").and_then(Value::as_str) {
        Some(format) => format!("{}({})", ty, format),
        None => ty,
    }
}

fn api_str<'v>(value: &'v Value, key: &str) -> &'v str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

fn upper(method: &str) -> &'static str {
    match method {
        "get" => "GET",
        "put" => "PUT",
        "post" => "POST",
        "delete" => "DELETE",
        "options" => "OPTIONS",
        "head" => "HEAD",
        "patch" => "PATCH",
        _ => "TRACE",
    }
}
