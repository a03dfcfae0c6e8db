//! Administration facade

use std::sync::Arc;

use reqwest::Method;
use veracity_domain::types::admin::{NewUser, UserAccount};

use super::errors::ApiError;
use super::json_body;
use crate::http::{handle, Dispatch, RequestOptions};

/// Facade over the `/admin` endpoints.
#[derive(Clone)]
pub struct AdminApi {
    dispatcher: Arc<dyn Dispatch>,
}

impl AdminApi {
    /// Build the facade over any dispatcher, real or fake.
    pub fn new(dispatcher: Arc<dyn Dispatch>) -> Self {
        Self { dispatcher }
    }

    /// List all platform accounts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn users(&self) -> Result<Vec<UserAccount>, ApiError> {
        let response = self
            .dispatcher
            .dispatch(Method::GET, "/admin/users", RequestOptions::default())
            .await?;
        handle(response)
    }

    /// Fetch one account by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn get_user(&self, id: &str) -> Result<UserAccount, ApiError> {
        let endpoint = format!("/admin/users/{id}");
        let response =
            self.dispatcher.dispatch(Method::GET, &endpoint, RequestOptions::default()).await?;
        handle(response)
    }

    /// Provision a new account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn create_user(&self, user: &NewUser) -> Result<UserAccount, ApiError> {
        let response = self
            .dispatcher
            .dispatch(Method::POST, "/admin/users", RequestOptions::with_body(json_body(user)?))
            .await?;
        handle(response)
    }

    /// Deactivate an account, returning its updated state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any pipeline failure.
    pub async fn deactivate_user(&self, id: &str) -> Result<UserAccount, ApiError> {
        let endpoint = format!("/admin/users/{id}");
        let response = self
            .dispatcher
            .dispatch(
                Method::PATCH,
                &endpoint,
                RequestOptions::with_body(serde_json::json!({ "active": false })),
            )
            .await?;
        handle(response)
    }
}
