#![deny(missing_docs)]

//! # Specification Source
//!
//! Reads the raw specification text from a file or URL and parses it as
//! YAML-or-JSON into an API description.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Parses specification text (YAML or JSON) into an API description.
///
/// The document root must be a mapping.
pub fn load_api_description(text: &str) -> AppResult<Value> {
    let api: Value = serde_yaml::from_str(text)?;
    if !api.is_object() {
        return Err(AppError::General(
            "API description root must be a mapping".into(),
        ));
    }
    let openapi = api.get("openapi").and_then(Value::as_str);
    let swagger = api.get("swagger").and_then(Value::as_str);
    debug!(openapi, swagger, "loaded API description");
    Ok(api)
}

/// Returns true when `location` names a remote document.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Reads specification text from a URL (fetched) or a local path (read).
pub fn read_spec_text(location: &str) -> AppResult<String> {
    if is_remote(location) {
        return fetch_spec_text(location);
    }
    info!(path = location, "reading specification");
    Ok(fs::read_to_string(Path::new(location))?)
}

/// Fetches specification text over HTTP. There is no retry.
#[cfg(feature = "client")]
pub fn fetch_spec_text(url: &str) -> AppResult<String> {
    info!(url, "fetching specification");
    let mut response = ureq::get(url)
        .call()
        .map_err(|e| AppError::Transport(format!("GET {} failed: {}", url, e)))?;
    response
        .body_mut()
        .read_to_string()
        .map_err(|e| AppError::Transport(format!("Failed to read body of {}: {}", url, e)))
}

/// Fetches specification text over HTTP. There is no retry.
#[cfg(not(feature = "client"))]
pub fn fetch_spec_text(url: &str) -> AppResult<String> {
    Err(AppError::Transport(format!(
        "Cannot fetch {}: built without the `client` feature",
        url
    )))
}
