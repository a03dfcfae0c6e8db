//! Remote API surface for Veracity
//!
//! One facade per conceptual resource, each a stateless adapter that
//! composes an endpoint path and funnels through the shared HTTP pipeline.
//! The [`VeracityClient`] aggregate wires one session context into every
//! facade; it performs no request logic itself.

pub mod admin;
pub mod client;
pub mod documents;
pub mod errors;
pub mod reports;
pub mod system;

pub use admin::AdminApi;
pub use client::VeracityClient;
pub use documents::DocumentsApi;
pub use errors::ApiError;
pub use reports::ReportsApi;
pub use system::SystemApi;

use serde::Serialize;

/// Encode a typed payload as the JSON body of an outbound request.
pub(crate) fn json_body<T: Serialize>(payload: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload)
        .map_err(|err| ApiError::InvalidRequest(format!("failed to encode request body: {err}")))
}
