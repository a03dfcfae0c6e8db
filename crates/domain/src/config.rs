//! Client configuration structures

use serde::{Deserialize, Serialize};

/// Configuration for a Veracity client instance.
///
/// The base address is used verbatim when composing request URLs: no slash
/// normalization is applied, so it should not carry a trailing `/` when
/// endpoint paths start with one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address of the remote API (e.g., "https://api.veracity.example/v2")
    pub base_url: String,
    /// Timeout applied to each request by the transport layer, in seconds
    pub timeout_seconds: u64,
    /// Bearer credential for protected endpoints, if one was issued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 30,
            credential: None,
        }
    }
}
