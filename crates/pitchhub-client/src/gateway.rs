//! # Request Gateway
//!
//! Single choke point for outbound HTTP calls: builds headers, attaches the
//! bearer token, serializes the body, and normalizes every failure into a
//! [`RequestError`].

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Value};
use std::fmt;
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::envelope::ResponseEnvelope;
use crate::error::{RequestError, Result};
use crate::store::CredentialStore;

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Returns true for verbs that carry a request body.
    #[must_use]
    pub fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Upper-case verb name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP request gateway.
///
/// Cheap to clone; clones share the connection pool and the credential
/// store.
#[derive(Clone)]
pub struct Gateway {
    base_url: Option<String>,
    http: Client,
    credentials: CredentialStore,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Creates a gateway.
    ///
    /// A missing base URL is accepted with a warning; requests then fail
    /// with a configuration error instead of hitting a relative URL.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is malformed or the
    /// HTTP client cannot be built.
    pub fn new(config: &ClientConfig, credentials: CredentialStore) -> Result<Self> {
        config.validate()?;

        if config.base_url.is_none() {
            tracing::warn!(
                var = crate::config::API_URL_ENV,
                "No API base URL configured; requests will fail until one is set"
            );
        }

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| {
            RequestError::configuration(format!("Failed to create HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http,
            credentials,
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Returns the credential store the gateway reads tokens from.
    #[must_use]
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Issues a request against `<base_url><endpoint>`.
    ///
    /// `body` is sent only for POST, PUT and PATCH. When `needs_auth` is set
    /// and a token is stored, it is sent as a bearer token.
    ///
    /// # Errors
    ///
    /// * Configuration - no base URL is configured (nothing is sent)
    /// * Transport - the request could not be sent or the body not read
    /// * Application - the server answered with a non-2xx status
    /// * Storage - the stored token could not be read
    pub async fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
        needs_auth: bool,
    ) -> Result<ResponseEnvelope> {
        let request = self.prepare(endpoint, method, body, needs_auth)?;
        self.execute(request, endpoint, method).await
    }

    /// Like [`Gateway::request`], but gives up as soon as `cancel` fires.
    ///
    /// # Errors
    ///
    /// Everything [`Gateway::request`] can return, plus a transport error
    /// with the message `"Request cancelled"` on cancellation.
    pub async fn request_with_cancellation(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
        needs_auth: bool,
        cancel: &CancellationToken,
    ) -> Result<ResponseEnvelope> {
        let request = self.prepare(endpoint, method, body, needs_auth)?;

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!(%method, endpoint, "Request cancelled");
                Err(RequestError::cancelled())
            }
            result = self.execute(request, endpoint, method) => result,
        }
    }

    /// Authenticated `GET`.
    ///
    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn get(&self, endpoint: &str) -> Result<ResponseEnvelope> {
        self.request(endpoint, Method::Get, None, true).await
    }

    /// Unauthenticated `GET`.
    ///
    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn get_public(&self, endpoint: &str) -> Result<ResponseEnvelope> {
        self.request(endpoint, Method::Get, None, false).await
    }

    /// Authenticated `POST`.
    ///
    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn post(&self, endpoint: &str, body: Option<&Value>) -> Result<ResponseEnvelope> {
        self.request(endpoint, Method::Post, body, true).await
    }

    /// Unauthenticated `POST`, for calls made before a token exists.
    ///
    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn post_public(
        &self,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<ResponseEnvelope> {
        self.request(endpoint, Method::Post, body, false).await
    }

    /// Authenticated `PUT`.
    ///
    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn put(&self, endpoint: &str, body: Option<&Value>) -> Result<ResponseEnvelope> {
        self.request(endpoint, Method::Put, body, true).await
    }

    /// Authenticated `PATCH`.
    ///
    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn patch(&self, endpoint: &str, body: Option<&Value>) -> Result<ResponseEnvelope> {
        self.request(endpoint, Method::Patch, body, true).await
    }

    /// Authenticated `DELETE`.
    ///
    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn delete(&self, endpoint: &str) -> Result<ResponseEnvelope> {
        self.request(endpoint, Method::Delete, None, true).await
    }

    fn prepare(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
        needs_auth: bool,
    ) -> Result<RequestBuilder> {
        let Some(base_url) = &self.base_url else {
            return Err(RequestError::configuration(
                "API base URL is not configured. Set PITCHHUB_API_URL.",
            ));
        };

        let url = format!("{base_url}{endpoint}");
        let mut request = self
            .http
            .request(method.to_reqwest(), &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE);

        let mut authenticated = false;
        if needs_auth {
            if let Some(token) = self.credentials.auth_token()? {
                request = request.header(AUTHORIZATION, format!("Bearer {token}"));
                authenticated = true;
            }
        }

        if let Some(body) = body.filter(|_| method.allows_body()) {
            let payload = serde_json::to_string(body).map_err(|e| {
                RequestError::validation(format!("Request body could not be serialized: {e}"))
            })?;
            request = request.body(payload);
        }

        tracing::debug!(%method, endpoint, authenticated, "Sending request");
        Ok(request)
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        endpoint: &str,
        method: Method,
    ) -> Result<ResponseEnvelope> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, endpoint, error = %e, "Request failed before a response");
            RequestError::transport(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::warn!(%method, endpoint, error = %e, "Failed to read response body");
            RequestError::transport(e.to_string())
        })?;
        let data = parse_body(&text);

        tracing::debug!(%method, endpoint, status = status.as_u16(), "Received response");

        if !status.is_success() {
            let err = RequestError::from_response(status.as_u16(), data);
            tracing::warn!(%method, endpoint, status = err.status, message = %err.message, "Request rejected");
            return Err(err);
        }

        Ok(ResponseEnvelope::new(status.as_u16(), data))
    }
}

/// Parses a response body as JSON, degrading to `{"message": <text>}`.
fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "message": text }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> Gateway {
        Gateway::new(&ClientConfig::new(server.uri()), CredentialStore::in_memory()).unwrap()
    }

    #[test]
    fn test_parse_body_fallback() {
        assert_eq!(parse_body("{\"a\":1}"), json!({"a": 1}));
        assert_eq!(parse_body("Bad Gateway"), json!({"message": "Bad Gateway"}));
        assert_eq!(parse_body(""), json!({"message": ""}));
    }

    #[test]
    fn test_method_body_rules() {
        assert!(Method::Post.allows_body());
        assert!(Method::Put.allows_body());
        assert!(Method::Patch.allows_body());
        assert!(!Method::Get.allows_body());
        assert!(!Method::Delete.allows_body());
    }

    #[tokio::test]
    async fn test_success_returns_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"role": "viewer"})))
            .mount(&server)
            .await;

        let envelope = gateway_for(&server).get("/users/me").await.unwrap();

        assert!(!envelope.is_error());
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.data, json!({"role": "viewer"}));
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_authenticated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/meetings"))
            .and(header("authorization", "Bearer T1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        gateway.credentials().set_auth_token(Some("T1")).unwrap();

        assert!(gateway.get("/meetings").await.is_ok());
    }

    #[tokio::test]
    async fn test_public_requests_never_send_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(|req: &Request| {
                if req.headers.contains_key("authorization") {
                    ResponseTemplate::new(400)
                } else {
                    ResponseTemplate::new(200).set_body_json(json!({"ok": true}))
                }
            })
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        gateway.credentials().set_auth_token(Some("stale")).unwrap();

        let envelope = gateway
            .post_public("/auth/login", Some(&json!({"email": "a@b.com"})))
            .await
            .unwrap();
        assert_eq!(envelope.data, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_body_sent_for_patch() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/users/me"))
            .and(body_json(json!({"bio": "hi"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bio": "hi"})))
            .expect(1)
            .mount(&server)
            .await;

        let envelope = gateway_for(&server)
            .patch("/users/me", Some(&json!({"bio": "hi"})))
            .await
            .unwrap();
        assert_eq!(envelope.data["bio"], "hi");
    }

    #[tokio::test]
    async fn test_body_dropped_for_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/reels/1/like"))
            .respond_with(|req: &Request| {
                if req.body.is_empty() {
                    ResponseTemplate::new(200).set_body_json(json!({"message": "Unliked"}))
                } else {
                    ResponseTemplate::new(400)
                }
            })
            .mount(&server)
            .await;

        let envelope = gateway_for(&server)
            .request("/reels/1/like", Method::Delete, Some(&json!({"x": 1})), true)
            .await
            .unwrap();
        assert_eq!(envelope.data["message"], "Unliked");
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_application_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pitch/9"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": {"message": "No pitch"}})),
            )
            .mount(&server)
            .await;

        let err = gateway_for(&server).get("/pitch/9").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Application);
        assert_eq!(err.status, 404);
        assert_eq!(err.message, "No pitch");
        assert_eq!(err.data, Some(json!({"error": {"message": "No pitch"}})));
    }

    #[tokio::test]
    async fn test_non_json_error_body_degrades_to_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reels"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = gateway_for(&server).get("/reels").await.unwrap_err();

        assert_eq!(err.status, 502);
        assert_eq!(err.message, "Bad Gateway");
        assert_eq!(err.data, Some(json!({"message": "Bad Gateway"})));
    }

    #[tokio::test]
    async fn test_missing_base_url_fails_fast() {
        let gateway = Gateway::new(&ClientConfig::default(), CredentialStore::in_memory()).unwrap();
        let err = gateway.get("/users/me").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.status, 0);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind then drop a listener to get a port nothing listens on.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = ClientConfig::new(format!("http://127.0.0.1:{port}"));
        let gateway = Gateway::new(&config, CredentialStore::in_memory()).unwrap();

        let err = gateway.get("/users/me").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.status, 0);
        assert!(!err.message.is_empty());
        assert!(err.data.is_none());
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let config = ClientConfig::new(server.uri()).with_timeout(Duration::from_millis(100));
        let gateway = Gateway::new(&config, CredentialStore::in_memory()).unwrap();

        let err = gateway.get("/slow").await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_cancellation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = gateway
            .request_with_cancellation("/slow", Method::Get, None, true, &cancel)
            .await
            .unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.message, "Request cancelled");
    }
}
