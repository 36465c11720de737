#![deny(missing_docs)]

//! # Endpoint Models
//!
//! Structured values recovered from the generated markdown.
//!
//! Positional fields that a short delimited line may not supply are `Option`s;
//! `None` slots are left out of the serialized form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Language label -> trimmed sample source.
pub type CodeSamples = IndexMap<String, String>;

/// Parameter name -> parameter metadata.
pub type Parameters = IndexMap<String, Parameter>;

/// Status code -> response metadata.
pub type Responses = IndexMap<String, Response>;

/// Endpoint name -> record, in document order.
pub type Endpoints = IndexMap<String, EndpointRecord>;

/// The `type|url` line heading a body component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyEndpoint {
    /// HTTP method as written (e.g. `POST`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Request path as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Request body: the endpoint line plus one parsed JSON document per data format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Method and path of the request.
    pub endpoint: BodyEndpoint,
    /// Data format label (e.g. `json`) -> parsed example.
    #[serde(flatten)]
    pub formats: IndexMap<String, Value>,
}

/// One `name|in|type|required|description` line, minus the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Location (`path`, `query`, `header`, `cookie`, `body`).
    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Declared type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Required flag, kept as the literal text (`"true"`/`"false"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response metadata for one status code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Example payload from a fenced JSON block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Reason phrase (e.g. `OK`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    /// Schema name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Everything recovered for one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointRecord {
    /// Code samples by language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeSamples>,
    /// Request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
    /// Parameters by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
    /// Responses by status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<Responses>,
    /// Callback section, trimmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<String>,
    /// Authentication section, trimmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
}
