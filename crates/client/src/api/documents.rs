//! Document facade

use std::sync::Arc;

use reqwest::Method;
use veracity_domain::types::documents::{
    Document, DocumentQuery, DocumentUpdate, NewDocument, TagPatch,
};

use super::errors::ApiError;
use super::json_body;
use crate::http::{handle, Dispatch, RequestOptions};

/// Facade over the `/documents` endpoints.
///
/// Stateless beyond the shared dispatcher; safe to call concurrently.
#[derive(Clone)]
pub struct DocumentsApi {
    dispatcher: Arc<dyn Dispatch>,
}

impl DocumentsApi {
    /// Build the facade over any dispatcher, real or fake.
    pub fn new(dispatcher: Arc<dyn Dispatch>) -> Self {
        Self { dispatcher }
    }

    /// List documents matching the given filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any non-2xx reply, content-type mismatch,
    /// parse failure, or transport fault.
    pub async fn list(&self, query: &DocumentQuery) -> Result<Vec<Document>, ApiError> {
        let response = self
            .dispatcher
            .dispatch(Method::GET, "/documents", RequestOptions::with_query(query.to_pairs()))
            .await?;
        handle(response)
    }

    /// Fetch a single document by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpFailure`] with status 404 when the id is
    /// unknown, or any other pipeline error.
    pub async fn get(&self, id: &str) -> Result<Document, ApiError> {
        let endpoint = format!("/documents/{id}");
        let response =
            self.dispatcher.dispatch(Method::GET, &endpoint, RequestOptions::default()).await?;
        handle(response)
    }

    /// Upload a new document.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn create(&self, document: &NewDocument) -> Result<Document, ApiError> {
        let response = self
            .dispatcher
            .dispatch(
                Method::POST,
                "/documents",
                RequestOptions::with_body(json_body(document)?),
            )
            .await?;
        handle(response)
    }

    /// Replace mutable metadata of a document.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn update(&self, id: &str, update: &DocumentUpdate) -> Result<Document, ApiError> {
        let endpoint = format!("/documents/{id}");
        let response = self
            .dispatcher
            .dispatch(Method::PUT, &endpoint, RequestOptions::with_body(json_body(update)?))
            .await?;
        handle(response)
    }

    /// Apply tag additions and removals.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn tag(&self, id: &str, patch: &TagPatch) -> Result<Document, ApiError> {
        let endpoint = format!("/documents/{id}/tags");
        let response = self
            .dispatcher
            .dispatch(Method::PATCH, &endpoint, RequestOptions::with_body(json_body(patch)?))
            .await?;
        handle(response)
    }

    /// Delete a document. The remote answers 204.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let endpoint = format!("/documents/{id}");
        let response = self
            .dispatcher
            .dispatch(Method::DELETE, &endpoint, RequestOptions::default())
            .await?;
        handle(response)
    }
}
