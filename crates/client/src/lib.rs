//! # Veracity Client
//!
//! Typed client layer for the remote Veracity platform, built around one
//! generic HTTP request/response pipeline.
//!
//! # Architecture
//!
//! - [`http`]: the engine. Request construction with credential injection
//!   and correlation-id tracing, single-shot dispatch with timing, and
//!   ordered response validation into typed values or structured errors.
//! - [`api`]: one facade per remote resource plus the [`VeracityClient`]
//!   aggregate that shares a single session context across all of them.
//! - [`config`]: env-first, file-fallback configuration loading.
//! - [`telemetry`]: log sink installation for hosting binaries.
//!
//! The pipeline performs no retry, caching, or circuit breaking; every
//! failure is raised to the caller with full diagnostic context.
//!
//! # Example
//!
//! ```no_run
//! use veracity_client::VeracityClient;
//! use veracity_domain::ClientConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig {
//!     base_url: "https://api.veracity.example/v2".to_string(),
//!     ..ClientConfig::default()
//! };
//! let client = VeracityClient::new(&config, Some("token".to_string()))?;
//! let healthy = client.system().check_health().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod http;
pub mod telemetry;

pub use api::{AdminApi, ApiError, DocumentsApi, ReportsApi, SystemApi, VeracityClient};
pub use http::{
    handle, ApiDispatcher, Dispatch, InboundResponse, RequestOptions, SessionContext,
};
