//! System resource payloads

use serde::{Deserialize, Serialize};

/// Deployment information exposed by the public system endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
}
