#![deny(missing_docs)]

//! # Extraction Module
//!
//! Turns the marker-annotated markdown back into endpoint records.
//!
//! - **models**: Records produced per endpoint.
//! - **code**, **body**, **params**, **responses**: Field extractors, one per component kind.
//! - **endpoint**: Splits a document into endpoints and dispatches components.

pub mod body;
pub mod code;
pub mod endpoint;
pub mod models;
pub mod params;
pub mod responses;

use crate::error::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;

pub use body::extract_request_body;
pub use code::extract_code_samples;
pub use endpoint::{parse_markdown_document, parse_markdown_document_with_options};
pub use models::{
    BodyEndpoint, CodeSamples, EndpointRecord, Endpoints, Parameter, Parameters, RequestBody,
    Response, Responses,
};
pub use params::extract_parameters;
pub use responses::{extract_responses, extract_responses_with_options};

/// Knobs for the extraction stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// When set, a response example merges into the existing record of its
    /// status code instead of replacing it.
    pub preserve_response_metadata: bool,
}

/// The closed set of component names a `$$$` block may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Endpoint key.
    Name,
    /// Code samples.
    Code,
    /// Request body.
    Body,
    /// Parameter table.
    Parameters,
    /// Responses.
    Responses,
    /// Callbacks, kept as text.
    Callbacks,
    /// Authentication, kept as text.
    Auth,
}

impl Component {
    /// Every component, in the order the renderer writes them.
    pub const ALL: [Component; 7] = [
        Component::Name,
        Component::Code,
        Component::Body,
        Component::Parameters,
        Component::Responses,
        Component::Callbacks,
        Component::Auth,
    ];

    /// The label used in the markdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Name => "name",
            Component::Code => "code",
            Component::Body => "body",
            Component::Parameters => "parameters",
            Component::Responses => "responses",
            Component::Callbacks => "callbacks",
            Component::Auth => "auth",
        }
    }

    /// Runs the extractor registered for this component over its raw text.
    pub fn extract(&self, raw: &str, options: &ExtractOptions) -> AppResult<ComponentValue> {
        let value = match self {
            Component::Name => ComponentValue::Name(raw.trim().to_string()),
            Component::Code => ComponentValue::Code(extract_code_samples(raw)),
            Component::Body => ComponentValue::Body(extract_request_body(raw)?),
            Component::Parameters => ComponentValue::Parameters(extract_parameters(raw)),
            Component::Responses => {
                ComponentValue::Responses(extract_responses_with_options(raw, options)?)
            }
            Component::Callbacks => ComponentValue::Callbacks(raw.trim().to_string()),
            Component::Auth => ComponentValue::Auth(raw.trim().to_string()),
        };
        Ok(value)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::UnknownComponent(s.to_string()))
    }
}

/// The value an extractor produced for one component.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// Trimmed endpoint key.
    Name(String),
    /// Code samples.
    Code(CodeSamples),
    /// Request body.
    Body(RequestBody),
    /// Parameters.
    Parameters(Parameters),
    /// Responses.
    Responses(Responses),
    /// Callback text.
    Callbacks(String),
    /// Auth text.
    Auth(String),
}

impl EndpointRecord {
    /// Stores `value` in its slot, replacing a previous value of the same kind.
    ///
    /// A `Name` value carries no record data and is ignored.
    pub fn apply(&mut self, value: ComponentValue) {
        match value {
            ComponentValue::Name(_) => {}
            ComponentValue::Code(v) => self.code = Some(v),
            ComponentValue::Body(v) => self.body = Some(v),
            ComponentValue::Parameters(v) => self.parameters = Some(v),
            ComponentValue::Responses(v) => self.responses = Some(v),
            ComponentValue::Callbacks(v) => self.callbacks = Some(v),
            ComponentValue::Auth(v) => self.auth = Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_round_trips_labels() {
        for component in Component::ALL {
            assert_eq!(component.as_str().parse::<Component>().unwrap(), component);
        }
    }

    #[test]
    fn test_unknown_component_label() {
        let err = "headers".parse::<Component>().unwrap_err();
        assert!(matches!(err, AppError::UnknownComponent(name) if name == "headers"));
        // Labels are matched exactly.
        assert!("Name".parse::<Component>().is_err());
    }

    #[test]
    fn test_pass_through_components_trim() {
        let options = ExtractOptions::default();
        let value = Component::Auth.extract("\n  api_key \n", &options).unwrap();
        assert_eq!(value, ComponentValue::Auth("api_key".into()));
        let value = Component::Callbacks.extract("onEvent|{$url}|POST\n", &options).unwrap();
        assert_eq!(value, ComponentValue::Callbacks("onEvent|{$url}|POST".into()));
    }

    #[test]
    fn test_apply_fills_slots() {
        let mut record = EndpointRecord::default();
        record.apply(ComponentValue::Auth("None".into()));
        record.apply(ComponentValue::Name("ignored".into()));
        assert_eq!(record.auth.as_deref(), Some("None"));
        assert!(record.code.is_none());
    }
}
