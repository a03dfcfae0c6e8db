//! API-specific error types
//!
//! One exported error type for everything that can go wrong between a
//! facade call and its typed result. The structured variants carry status
//! code and raw body as first-class fields so callers classify failures
//! without scraping message text.

use thiserror::Error;

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The remote replied outside the 2xx range. Terminal for the call;
    /// the raw body is kept for diagnosis without re-issuing the request.
    #[error("{message}")]
    HttpFailure { status: u16, message: String, body: String },

    /// A 2xx reply whose content type does not include `application/json`.
    #[error("unexpected content type `{content_type}`")]
    UnexpectedContentType { content_type: String, body: String },

    /// A JSON reply that could not be parsed into the declared type.
    #[error("failed to parse response body: {message}")]
    BodyParseFailure { message: String, body: String },

    /// A request payload that could not be encoded as JSON.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Transport-level fault (network, DNS, timeout), propagated opaquely.
    /// Never classified or retried by the pipeline.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status attached to this failure, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpFailure { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            Self::UnexpectedContentType { .. }
            | Self::BodyParseFailure { .. }
            | Self::InvalidRequest(_) => None,
        }
    }

    /// Whether the remote classified the request as a caller fault (4xx).
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_some_and(|status| (400..500).contains(&status))
    }

    /// Whether the remote reported a server fault (5xx).
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_some_and(|status| (500..600).contains(&status))
    }

    /// The raw response body attached at the point of detection, if any.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::HttpFailure { body, .. }
            | Self::UnexpectedContentType { body, .. }
            | Self::BodyParseFailure { body, .. } => Some(body),
            Self::InvalidRequest(_) | Self::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_failure(status: u16) -> ApiError {
        ApiError::HttpFailure {
            status,
            message: format!("HTTP {status} (correlation id N/A)"),
            body: "{}".to_string(),
        }
    }

    #[test]
    fn status_code_is_a_first_class_field() {
        assert_eq!(http_failure(404).status_code(), Some(404));
        assert_eq!(http_failure(503).status_code(), Some(503));
    }

    #[test]
    fn classifies_client_and_server_errors() {
        assert!(http_failure(404).is_client_error());
        assert!(!http_failure(404).is_server_error());
        assert!(http_failure(500).is_server_error());
        assert!(!http_failure(500).is_client_error());
    }

    #[test]
    fn non_http_failures_carry_no_status() {
        let err = ApiError::UnexpectedContentType {
            content_type: "text/html".to_string(),
            body: "<html/>".to_string(),
        };
        assert_eq!(err.status_code(), None);
        assert!(!err.is_client_error());
        assert!(!err.is_server_error());
    }

    #[test]
    fn raw_body_is_available_for_structured_variants() {
        assert_eq!(http_failure(500).raw_body(), Some("{}"));

        let parse = ApiError::BodyParseFailure {
            message: "eof".to_string(),
            body: "{\"id\":".to_string(),
        };
        assert_eq!(parse.raw_body(), Some("{\"id\":"));
    }
}
