//! System facade
//!
//! Public endpoints: these never carry an Authorization header, even when
//! the session holds a credential.

use std::sync::Arc;

use reqwest::Method;
use tracing::warn;
use veracity_domain::types::system::SystemInfo;

use super::errors::ApiError;
use crate::http::{handle, Dispatch, RequestOptions};

/// Facade over the public `/system` endpoints.
#[derive(Clone)]
pub struct SystemApi {
    dispatcher: Arc<dyn Dispatch>,
}

impl SystemApi {
    /// Build the facade over any dispatcher, real or fake.
    pub fn new(dispatcher: Arc<dyn Dispatch>) -> Self {
        Self { dispatcher }
    }

    /// Fetch deployment information.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn info(&self) -> Result<SystemInfo, ApiError> {
        let response = self
            .dispatcher
            .dispatch(Method::GET, "/system/info", RequestOptions::public())
            .await?;
        handle(response)
    }

    /// Check whether the remote platform is reachable and healthy.
    ///
    /// Transport faults are reported as `Ok(false)` rather than errors so
    /// smoke callers can probe availability without unwinding.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for non-transport pipeline failures.
    pub async fn check_health(&self) -> Result<bool, ApiError> {
        match self
            .dispatcher
            .dispatch(Method::GET, "/system/health", RequestOptions::public())
            .await
        {
            Ok(response) => Ok(response.status.is_success()),
            Err(ApiError::Transport(err)) => {
                warn!(error = %err, "health check failed: transport fault");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}
