#![deny(missing_docs)]

//! # Status Reasons
//!
//! Reason phrases for the `meaning` column of rendered responses.

use http::StatusCode;

/// Reason phrase for a Responses Object key (`200`, `4XX`, `default`).
///
/// Codes without a registered phrase map to `Unknown`.
pub fn status_meaning(code: &str) -> &'static str {
    if code.eq_ignore_ascii_case("default") {
        return "Default";
    }

    if let Ok(status) = code.parse::<u16>() {
        return StatusCode::from_u16(status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown");
    }

    match code.to_ascii_uppercase().as_str() {
        "1XX" => "Informational",
        "2XX" => "Success",
        "3XX" => "Redirection",
        "4XX" => "Client Error",
        "5XX" => "Server Error",
        _ => "Unknown",
    }
}
