//! Response validation and parsing
//!
//! One entry point, [`handle`], turns a raw [`InboundResponse`] into a typed
//! value or a structured [`ApiError`]. The check order is the contract:
//! status before content type, content type before parse, so a 500 with an
//! HTML error page surfaces as `HttpFailure` with its status code rather
//! than as a content-type mismatch.

use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::dispatcher::CORRELATION_HEADER;
use crate::api::errors::ApiError;

/// A received response with its body text read from the stream exactly once
/// and cached. Consumed (by value) by [`handle`].
#[derive(Debug)]
pub struct InboundResponse {
    pub status: StatusCode,
    /// Response headers; lookup is case-insensitive.
    pub headers: HeaderMap,
    /// Cached body text, reused for logging and parsing.
    pub body: String,
    pub elapsed: Duration,
}

impl InboundResponse {
    /// Look up a header value as a string, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Wall-clock time between send and completion, in milliseconds.
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// Validate and parse a response into `T`.
///
/// Check order, first match wins:
/// 1. status outside 200..=299 → [`ApiError::HttpFailure`]
/// 2. status 204 or empty body → deserialize JSON `null` into `T`
/// 3. content type lacking `application/json` → [`ApiError::UnexpectedContentType`]
/// 4. JSON parse of the cached body → value, or [`ApiError::BodyParseFailure`]
///
/// The caller-declared `T` is trusted: beyond serde's shape check there is
/// no schema validation of successful payloads.
///
/// # Errors
///
/// Every failure carries the raw body (and status where applicable) so the
/// fault can be diagnosed without re-issuing the request.
pub fn handle<T: DeserializeOwned>(response: InboundResponse) -> Result<T, ApiError> {
    let status = response.status;

    if !status.is_success() {
        // The correlation id echoed by the server pairs this failure with
        // the request's log lines; N/A when the server did not echo one.
        let correlation_id =
            response.header(CORRELATION_HEADER).unwrap_or("N/A").to_string();
        return Err(ApiError::HttpFailure {
            status: status.as_u16(),
            message: format!(
                "HTTP {} (correlation id {correlation_id})",
                status.as_u16()
            ),
            body: response.body,
        });
    }

    if status == StatusCode::NO_CONTENT || response.body.is_empty() {
        // Nothing to parse; the caller's type decides whether null is
        // an acceptable result.
        return serde_json::from_value(serde_json::Value::Null).map_err(|err| {
            ApiError::BodyParseFailure {
                message: format!("empty response cannot populate the requested type: {err}"),
                body: String::new(),
            }
        });
    }

    let content_type = response.header(CONTENT_TYPE.as_str()).unwrap_or_default().to_string();
    if !content_type.contains("application/json") {
        return Err(ApiError::UnexpectedContentType { content_type, body: response.body });
    }

    serde_json::from_str(&response.body).map_err(|err| ApiError::BodyParseFailure {
        message: err.to_string(),
        body: response.body,
    })
}
