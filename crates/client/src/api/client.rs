//! Client aggregate
//!
//! Composes one facade per resource over a single session context and
//! dispatcher. Credential propagation is its only responsibility.

use std::sync::Arc;
use std::time::Duration;

use veracity_domain::{ClientConfig, Result};

use super::admin::AdminApi;
use super::documents::DocumentsApi;
use super::reports::ReportsApi;
use super::system::SystemApi;
use crate::http::{ApiDispatcher, Dispatch, SessionContext};

/// Aggregate client for the remote Veracity platform.
///
/// The session context is immutable after construction and shared
/// read-only by every facade, so one client instance is safe to drive from
/// concurrent callers for the lifetime of a test run.
pub struct VeracityClient {
    session: Arc<SessionContext>,
    documents: DocumentsApi,
    reports: ReportsApi,
    admin: AdminApi,
    system: SystemApi,
}

impl VeracityClient {
    /// Build a client from configuration plus the credential supplied by
    /// the external session bootstrap, if one was issued.
    ///
    /// The credential is never validated or refreshed here; it is attached
    /// as-is to every non-public request.
    ///
    /// # Errors
    ///
    /// Returns `VeracityError::Config` if the HTTP transport cannot be
    /// constructed.
    pub fn new(config: &ClientConfig, credential: Option<String>) -> Result<Self> {
        let session = Arc::new(SessionContext { base_url: config.base_url.clone(), credential });
        let dispatcher: Arc<dyn Dispatch> = Arc::new(ApiDispatcher::new(
            Arc::clone(&session),
            Duration::from_secs(config.timeout_seconds),
        )?);

        Ok(Self {
            documents: DocumentsApi::new(Arc::clone(&dispatcher)),
            reports: ReportsApi::new(Arc::clone(&dispatcher)),
            admin: AdminApi::new(Arc::clone(&dispatcher)),
            system: SystemApi::new(dispatcher),
            session,
        })
    }

    /// Build a client taking the credential from the configuration itself.
    ///
    /// # Errors
    ///
    /// Returns `VeracityError::Config` if the HTTP transport cannot be
    /// constructed.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config, config.credential.clone())
    }

    /// The shared session context.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Document endpoints.
    pub fn documents(&self) -> &DocumentsApi {
        &self.documents
    }

    /// Report endpoints.
    pub fn reports(&self) -> &ReportsApi {
        &self.reports
    }

    /// Administration endpoints.
    pub fn admin(&self) -> &AdminApi {
        &self.admin
    }

    /// Public system endpoints.
    pub fn system(&self) -> &SystemApi {
        &self.system
    }
}
