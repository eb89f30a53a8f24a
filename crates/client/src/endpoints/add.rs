//! `add` endpoint implementation.
//!
//! # What this module handles:
//! - Form-encoded submission to `/publicapi/add`
//! - Mapping Prowl's XML responses to [`ProwlSuccess`] or [`ClientError`]
//!
//! # What this module does NOT handle:
//! - Key registration or notification validation (see [`crate::client`])
//!
//! # Invariants
//! - Exactly one HTTP request per call; nothing is retried
//! - The API key is never logged

use reqwest::Client;

use crate::error::{ClientError, Result};
use crate::models::{ProwlResponse, ProwlSuccess, parse_response};
use prowl_config::constants::ADD_PATH;

/// Submit a notification to Prowl.
///
/// # Arguments
/// * `client` - The HTTP client
/// * `base_url` - The Prowl API base URL (e.g., "https://api.prowlapp.com")
/// * `form` - Form fields, including `apikey`
///
/// # Errors
/// Returns `ClientError::ApiError` when Prowl rejects the call, and
/// `ClientError::InvalidResponse` when a successful status carries a body
/// that is not a Prowl document.
pub async fn add_notification(
    client: &Client,
    base_url: &str,
    form: &[(&str, &str)],
) -> Result<ProwlSuccess> {
    let url = format!("{}{}", base_url, ADD_PATH);

    tracing::debug!(url = %url, "POST notification");
    let response = client.post(&url).form(form).send().await?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to read response body: {e}")))?;

    match parse_response(&body) {
        Some(ProwlResponse::Success(success)) if status < 400 => Ok(success),
        Some(ProwlResponse::Success(_)) => Err(ClientError::ApiError {
            status,
            url,
            message: "unexpected success document with error status".to_string(),
        }),
        Some(ProwlResponse::Error(error)) => Err(ClientError::ApiError {
            status: if error.code != 0 { error.code } else { status },
            url,
            message: if error.message.is_empty() {
                describe_code(error.code).to_string()
            } else {
                error.message
            },
        }),
        None if status >= 400 => Err(ClientError::ApiError {
            status,
            url,
            message: if body.trim().is_empty() {
                describe_code(status).to_string()
            } else {
                body
            },
        }),
        None => Err(ClientError::InvalidResponse(format!(
            "Failed to parse Prowl response (HTTP {status})"
        ))),
    }
}

/// Meaning of the error codes documented by the Prowl API.
fn describe_code(code: u16) -> &'static str {
    match code {
        400 => "Bad request, the parameters you provided did not validate",
        401 => "Not authorized, the API key given is not valid",
        405 => "Method not allowed",
        406 => "Not acceptable, your IP address has exceeded the API limit",
        409 => "Not approved, the user has yet to approve your retrieve request",
        500 => "Internal server error",
        _ => "Unexpected error",
    }
}
