//! Request pipeline
//!
//! Builds a fully-specified request from caller intent plus the shared
//! session state, sends it exactly once, and hands back the raw response
//! with its body text already cached. Authentication, correlation-id
//! tracing, timing, and masked request logging all live here so the
//! facades stay pure endpoint tables.
//!
//! The pipeline is single-shot: no retry, no backoff, no caching. Callers
//! that want recovery implement it above this layer.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method};
use tracing::{debug, info, trace, warn};
use uuid::Uuid;
use veracity_domain::{Result as DomainResult, VeracityError};

use super::response::InboundResponse;
use crate::api::errors::ApiError;

/// Header carrying the per-request correlation token.
pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// Placeholder written into log output in place of the Authorization value.
/// The header sent over the wire is never masked.
pub const AUTHORIZATION_MASK: &str = "Bearer ***";

const ACCEPT_VALUE: &str = "application/json, text/plain, */*";
const CONTENT_TYPE_VALUE: &str = "application/json;charset=UTF-8";

/// Immutable per-client session state shared read-only by every facade.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Base address prepended verbatim to every endpoint path.
    pub base_url: String,
    /// Bearer credential attached to non-public requests, if held.
    pub credential: Option<String>,
}

/// Per-call request parameters beyond method and endpoint.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Ordered query pairs, appended to the URL in the given order.
    pub query: Vec<(String, String)>,
    /// JSON body, if the operation carries one.
    pub body: Option<serde_json::Value>,
    /// Public endpoints never receive an Authorization header, even when a
    /// credential is held.
    pub public: bool,
}

impl RequestOptions {
    /// Options carrying only query pairs.
    pub fn with_query(query: Vec<(String, String)>) -> Self {
        Self { query, ..Self::default() }
    }

    /// Options carrying only a JSON body.
    pub fn with_body(body: serde_json::Value) -> Self {
        Self { body: Some(body), ..Self::default() }
    }

    /// Options for an unauthenticated endpoint.
    pub fn public() -> Self {
        Self { public: true, ..Self::default() }
    }
}

/// Dispatch seam between the facades and the HTTP pipeline.
///
/// Facades depend on this trait rather than on [`ApiDispatcher`] directly so
/// each can be tested against a fake dispatcher.
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Send one request and return the raw response with cached body text.
    ///
    /// # Errors
    ///
    /// Fails only with [`ApiError::Transport`]: network, DNS, and timeout
    /// faults from the transport layer, propagated opaquely. Status-code
    /// and body validation happen later in [`crate::http::handle`].
    async fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<InboundResponse, ApiError>;
}

/// Production request pipeline over a shared reqwest client.
///
/// Stateless across calls: safe to share behind an `Arc` and drive from
/// concurrent callers. The connection pool belongs to reqwest.
pub struct ApiDispatcher {
    session: Arc<SessionContext>,
    http: ReqwestClient,
}

impl ApiDispatcher {
    /// Create a dispatcher over the given session with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `VeracityError::Config` if the underlying transport cannot
    /// be constructed.
    pub fn new(session: Arc<SessionContext>, timeout: Duration) -> DomainResult<Self> {
        let http = ReqwestClient::builder().timeout(timeout).build().map_err(|err| {
            VeracityError::Config(format!("failed to build HTTP transport: {err}"))
        })?;

        Ok(Self { session, http })
    }

    /// The session shared with every facade.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    async fn dispatch_inner(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<InboundResponse, ApiError> {
        // Base address and endpoint are joined verbatim; callers own
        // well-formed endpoint strings.
        let url = format!("{}{}", self.session.base_url, endpoint);
        let correlation_id = mint_correlation_id();

        let headers = self.build_headers(&correlation_id, options.public);

        trace!(
            correlation_id = %correlation_id,
            method = %method,
            url = %url,
            query = ?options.query,
            body = ?options.body,
            headers = ?masked_headers(&headers),
            "dispatching request"
        );

        let mut request = self.http.request(method.clone(), &url).headers(headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let started = Instant::now();
        let response = request.send().await?;
        let elapsed = started.elapsed();

        let status = response.status();
        let response_headers = response.headers().clone();
        info!(
            correlation_id = %correlation_id,
            status = status.as_u16(),
            method = %method,
            url = %url,
            elapsed_ms = elapsed.as_millis() as u64,
            "received response"
        );

        // The body stream is single-use: read it to text once and reuse the
        // cached value for both logging and parsing.
        let body = response.text().await?;
        debug!(correlation_id = %correlation_id, headers = ?response_headers, "response headers");
        trace!(correlation_id = %correlation_id, body = %body, "response body");

        Ok(InboundResponse { status, headers: response_headers, body, elapsed })
    }

    fn build_headers(&self, correlation_id: &str, public: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_VALUE));
        if let Ok(value) = HeaderValue::from_str(correlation_id) {
            headers.insert(CORRELATION_HEADER, value);
        }

        if !public {
            if let Some(credential) = self.session.credential.as_deref() {
                match HeaderValue::from_str(&format!("Bearer {credential}")) {
                    Ok(mut value) => {
                        value.set_sensitive(true);
                        headers.insert(AUTHORIZATION, value);
                    }
                    Err(_) => {
                        // The request goes out unauthenticated and the remote
                        // rejects it with a diagnosable 401.
                        warn!("credential contains non-header-safe characters; skipping Authorization");
                    }
                }
            }
        }

        headers
    }
}

#[async_trait]
impl Dispatch for ApiDispatcher {
    async fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<InboundResponse, ApiError> {
        self.dispatch_inner(method, endpoint, options).await
    }
}

/// Mint the per-request correlation token: short, opaque, unique enough for
/// pairing the outbound trace line with the inbound response line.
fn mint_correlation_id() -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(8);
    token
}

/// Log-formatting step applied just before emission: render the header map
/// with the Authorization value replaced by [`AUTHORIZATION_MASK`]. The real
/// header map used for the wire call is never mutated.
fn masked_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if *name == AUTHORIZATION {
                AUTHORIZATION_MASK.to_string()
            } else {
                value.to_str().unwrap_or("<non-ascii>").to_string()
            };
            (name.as_str().to_string(), shown)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn dispatcher(base_url: String, credential: Option<&str>) -> ApiDispatcher {
        let session = Arc::new(SessionContext {
            base_url,
            credential: credential.map(str::to_string),
        });
        ApiDispatcher::new(session, Duration::from_secs(5)).expect("dispatcher")
    }

    #[tokio::test]
    async fn attaches_bearer_credential_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/documents"))
            .and(header("Authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher(server.uri(), Some("secret-token"));
        let response = dispatcher
            .dispatch(Method::GET, "/documents", RequestOptions::default())
            .await
            .expect("response");

        assert_eq!(response.status.as_u16(), 200);
    }

    #[tokio::test]
    async fn omits_authorization_for_public_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/system/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let dispatcher = dispatcher(server.uri(), Some("secret-token"));
        dispatcher
            .dispatch(Method::GET, "/system/health", RequestOptions::public())
            .await
            .expect("response");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("Authorization").is_none());
    }

    #[tokio::test]
    async fn omits_authorization_without_credential() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let dispatcher = dispatcher(server.uri(), None);
        dispatcher
            .dispatch(Method::GET, "/documents", RequestOptions::default())
            .await
            .expect("response");

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("Authorization").is_none());
    }

    #[tokio::test]
    async fn sends_correlation_and_negotiation_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("Accept", "application/json, text/plain, */*"))
            .and(header("Content-Type", "application/json;charset=UTF-8"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher(server.uri(), None);
        dispatcher
            .dispatch(Method::GET, "/documents", RequestOptions::default())
            .await
            .expect("response");

        let requests = server.received_requests().await.unwrap();
        let correlation = requests[0]
            .headers
            .get(CORRELATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .expect("correlation header");
        assert_eq!(correlation.len(), 8);
    }

    #[tokio::test]
    async fn each_dispatch_mints_a_fresh_correlation_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let dispatcher = dispatcher(server.uri(), None);
        dispatcher
            .dispatch(Method::GET, "/a", RequestOptions::default())
            .await
            .expect("first");
        dispatcher
            .dispatch(Method::GET, "/b", RequestOptions::default())
            .await
            .expect("second");

        let requests = server.received_requests().await.unwrap();
        let ids: Vec<_> = requests
            .iter()
            .map(|request| {
                request
                    .headers
                    .get(CORRELATION_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string)
                    .expect("correlation header")
            })
            .collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[tokio::test]
    async fn sends_ordered_query_pairs_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/documents"))
            .and(query_param("folder", "finance"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher(server.uri(), None);
        let options = RequestOptions {
            query: vec![
                ("folder".to_string(), "finance".to_string()),
                ("limit".to_string(), "10".to_string()),
            ],
            body: Some(serde_json::json!({"name": "notes.txt"})),
            public: false,
        };
        dispatcher.dispatch(Method::POST, "/documents", options).await.expect("response");

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["name"], "notes.txt");
    }

    #[tokio::test]
    async fn caches_body_text_and_records_elapsed_time() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("payload"))
            .mount(&server)
            .await;

        let dispatcher = dispatcher(server.uri(), None);
        let response = dispatcher
            .dispatch(Method::GET, "/documents", RequestOptions::default())
            .await
            .expect("response");

        assert_eq!(response.body, "payload");
        assert!(response.elapsed > Duration::ZERO);
    }

    #[tokio::test]
    async fn propagates_transport_faults_opaquely() {
        // Bind then drop a listener so the port refuses connections.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let dispatcher = dispatcher(format!("http://{addr}"), None);
        let result = dispatcher
            .dispatch(Method::GET, "/documents", RequestOptions::default())
            .await;

        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[test]
    fn masking_replaces_only_the_authorization_value() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer secret-token"));

        let masked = masked_headers(&headers);

        assert!(masked.contains(&("accept".to_string(), ACCEPT_VALUE.to_string())));
        assert!(masked.contains(&("authorization".to_string(), AUTHORIZATION_MASK.to_string())));
        assert!(masked.iter().all(|(_, value)| !value.contains("secret-token")));
        // The wire header map itself is untouched.
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret-token");
    }

    #[test]
    fn correlation_tokens_are_short_and_distinct() {
        let first = mint_correlation_id();
        let second = mint_correlation_id();
        assert_eq!(first.len(), 8);
        assert_ne!(first, second);
    }
}
