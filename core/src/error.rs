#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Every failure is fail-fast: extractors and the pipeline return the first
//! error they hit and never hand back a partially assembled result.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (reading a spec or markdown file).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The specification could not be retrieved over the network.
    #[from(ignore)]
    #[display("Transport Error: {_0}")]
    Transport(String),

    /// The specification text is neither valid YAML nor JSON.
    #[display("Specification Error: {_0}")]
    Spec(serde_yaml::Error),

    /// The document source failed to produce markdown.
    #[from(ignore)]
    #[display("Render Error: {_0}")]
    Render(String),

    /// A fenced block that must hold JSON did not parse.
    #[display("Malformed JSON: {_0}")]
    Json(serde_json::Error),

    /// A `$$$` block named a component outside the known set.
    #[from(ignore)]
    #[display("Unknown component '{_0}'")]
    UnknownComponent(String),

    /// A component closed before the `name` component of its endpoint.
    #[from(ignore)]
    #[display("Component '{_0}' closed before the endpoint name was known")]
    MissingEndpointName(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // Test that String defaults to General, not Transport or Render
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_json_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let app_err: AppError = parse_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
        assert!(format!("{}", app_err).starts_with("Malformed JSON: "));
    }

    #[test]
    fn test_component_errors_display() {
        let app_err = AppError::UnknownComponent("headers".into());
        assert_eq!(format!("{}", app_err), "Unknown component 'headers'");

        let app_err = AppError::MissingEndpointName("code".into());
        assert_eq!(
            format!("{}", app_err),
            "Component 'code' closed before the endpoint name was known"
        );
    }
}
