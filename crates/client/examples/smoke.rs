//! Smoke probe against a live deployment
//!
//! Run with `VERACITY_BASE_URL` (and optionally `VERACITY_API_TOKEN`) set.
//! Failures are classified as caller vs platform faults via the structured
//! status field on `ApiError`; no message parsing involved.

use veracity_client::{telemetry, VeracityClient};
use veracity_domain::types::documents::DocumentQuery;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = veracity_client::config::load()?;
    let client = VeracityClient::from_config(&config)?;

    if !client.system().check_health().await? {
        tracing::error!("platform unreachable; aborting smoke run");
        return Ok(());
    }

    match client.documents().list(&DocumentQuery::default()).await {
        Ok(documents) => {
            tracing::info!(count = documents.len(), "documents endpoint healthy");
        }
        Err(err) if err.is_client_error() => {
            tracing::error!(status = ?err.status_code(), "rejected by the platform; check credential");
        }
        Err(err) if err.is_server_error() => {
            tracing::error!(status = ?err.status_code(), "platform-side failure");
        }
        Err(err) => {
            tracing::error!(error = %err, "pipeline failure");
        }
    }

    Ok(())
}
