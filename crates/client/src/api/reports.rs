//! Report facade

use std::sync::Arc;

use reqwest::Method;
use veracity_domain::types::reports::{Report, ReportRequest};

use super::errors::ApiError;
use super::json_body;
use crate::http::{handle, Dispatch, RequestOptions};

/// Facade over the `/reports` endpoints.
#[derive(Clone)]
pub struct ReportsApi {
    dispatcher: Arc<dyn Dispatch>,
}

impl ReportsApi {
    /// Build the facade over any dispatcher, real or fake.
    pub fn new(dispatcher: Arc<dyn Dispatch>) -> Self {
        Self { dispatcher }
    }

    /// Request generation of a new report.
    ///
    /// The returned job is usually still `pending`; poll [`Self::status`]
    /// until it finishes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn request(&self, request: &ReportRequest) -> Result<Report, ApiError> {
        let response = self
            .dispatcher
            .dispatch(Method::POST, "/reports", RequestOptions::with_body(json_body(request)?))
            .await?;
        handle(response)
    }

    /// Fetch the current state of a report job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn status(&self, id: &str) -> Result<Report, ApiError> {
        let endpoint = format!("/reports/{id}");
        let response =
            self.dispatcher.dispatch(Method::GET, &endpoint, RequestOptions::default()).await?;
        handle(response)
    }

    /// List all report jobs visible to the session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn list(&self) -> Result<Vec<Report>, ApiError> {
        let response = self
            .dispatcher
            .dispatch(Method::GET, "/reports", RequestOptions::default())
            .await?;
        handle(response)
    }

    /// Cancel a queued or running report job. The remote answers 204.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn cancel(&self, id: &str) -> Result<(), ApiError> {
        let endpoint = format!("/reports/{id}");
        let response = self
            .dispatcher
            .dispatch(Method::DELETE, &endpoint, RequestOptions::default())
            .await?;
        handle(response)
    }
}
