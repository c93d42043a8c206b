//
//  echosign
//  api/client.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! # Session Handle and Request Dispatcher
//!
//! [`EchosignClient`] is the core HTTP client for the EchoSign REST API. It
//! handles:
//!
//! - Lazy, single-flight discovery of the per-account base URI (accounts are
//!   sharded across regional hosts, so the first call asks the fixed host
//!   which access point serves this account, then caches it for the client's
//!   lifetime)
//! - `Access-Token` header injection on every call, plus the on-behalf-of
//!   `X-User-Id` / `X-User-Email` header when a request carries one
//! - JSON bodies for regular calls, multipart for document upload, raw bytes
//!   for downloads
//! - Error normalization: transport failures and non-2xx responses both
//!   surface as [`Error::Request`]; a raw `reqwest::Error` never escapes
//!
//! # Creating a Client
//!
//! ```rust,no_run
//! use echosign::api::EchosignClient;
//! use echosign::auth::Credentials;
//!
//! # async fn example() -> echosign::Result<()> {
//! // From a raw access token:
//! let client = EchosignClient::new("access-token")?;
//!
//! // Or from authorized credentials (legacy flow):
//! let mut credentials = Credentials::new("id", "secret")?;
//! credentials.get_token("https://example.com/cb", "code").await?;
//! let client = EchosignClient::from_credentials(&credentials)?;
//! # Ok(())
//! # }
//! ```

use reqwest::multipart::Form;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::api::endpoint::{ApiVersion, EndpointTable, API_HOST};
use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::requests::UserIdentity;

/// Auth header carrying the bearer token on every API call.
const ACCESS_TOKEN_HEADER: &str = "Access-Token";

/// Session handle for the EchoSign REST API.
///
/// Holds a bearer token and a lazily resolved, cached base URI. One client
/// serves one token for its lifetime; token refresh produces a new client.
/// The client is cheap to share behind an `Arc` across tasks: the base-URI
/// cache is single-flight, so concurrent first calls trigger exactly one
/// discovery request.
pub struct EchosignClient {
    /// The underlying HTTP client.
    http: reqwest::Client,
    /// Bearer token attached to every request.
    token: String,
    /// Fixed API host used for base-URI discovery (and as the degraded-mode
    /// base URI).
    api_host: String,
    /// Endpoint table revision selected at construction.
    table: &'static EndpointTable,
    /// Cached per-account access point, discovered at most once.
    base_uri: OnceCell<String>,
}

impl EchosignClient {
    /// Creates a client from a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("echosign/{}", crate::VERSION))
            .build()
            .map_err(|e| Error::request("Failed to build HTTP client", e))?;

        Ok(Self {
            http,
            token: token.into(),
            api_host: API_HOST.to_string(),
            table: ApiVersion::default().table(),
            base_uri: OnceCell::new(),
        })
    }

    /// Creates a client from authorized [`Credentials`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the credentials have not
    /// completed a token exchange.
    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        let token = credentials.access_token().ok_or_else(|| {
            Error::InvalidArgument(
                "credentials have no access token; call get_token first".to_string(),
            )
        })?;

        Self::new(token)
    }

    /// Overrides the fixed API host used for base-URI discovery.
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    /// Replaces the underlying HTTP client, e.g. to set timeouts or a proxy.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Selects the REST API revision. Defaults to [`ApiVersion::V5`].
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.table = version.table();
        self
    }

    /// Pins the base URI, skipping per-account discovery.
    ///
    /// Degraded mode for accounts where the `base_uris` call is unavailable;
    /// the supplied URI (typically the fixed API host) is used as-is for
    /// every request.
    pub fn with_fixed_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = OnceCell::new_with(Some(base_uri.into()));
        self
    }

    /// The per-account base URI, discovering and caching it on first use.
    ///
    /// Discovery calls the `base_uris` endpoint on the fixed API host with
    /// the bearer token attached and caches the `api_access_point` field.
    /// The cache is single-flight: concurrent callers on a fresh client
    /// produce exactly one discovery request, and it never runs again for
    /// the lifetime of the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] if discovery fails at the transport or
    /// HTTP level, and [`Error::UnexpectedResponse`] if the response has no
    /// `api_access_point` field.
    pub async fn base_uri(&self) -> Result<&str> {
        self.base_uri
            .get_or_try_init(|| async {
                let url = self.table.resolve("base_uri", &self.api_host)?;

                tracing::debug!(%url, "discovering account base URI");

                let response = self.send(self.http.get(&url)).await?;
                let body = Self::read_json(response).await?;
                let access_point = super::fetch_string(&body, "api_access_point")?;

                tracing::debug!(%access_point, "cached account base URI");

                Ok(access_point)
            })
            .await
            .map(String::as_str)
    }

    /// Attaches auth headers and executes the request, normalizing failures.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .header(ACCESS_TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| Error::request("Transport failure while calling the EchoSign API", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(status, &body));
        }

        Ok(response)
    }

    /// Decodes a successful response body as JSON.
    async fn read_json(response: reqwest::Response) -> Result<Value> {
        let body = response
            .text()
            .await
            .map_err(|e| Error::request("Failed to read response body", e))?;

        serde_json::from_str(&body)
            .map_err(|_| Error::UnexpectedResponse { field: "valid JSON".to_string(), body })
    }

    /// Resolves a logical endpoint plus suffix against the cached base URI.
    async fn url_for(&self, logical: &str, suffix: &str) -> Result<String> {
        // Resolve the endpoint before touching the network so an unknown
        // logical name fails without triggering base-URI discovery.
        self.table.resolve(logical, &self.api_host)?;

        let base = self.base_uri().await?;
        let mut url = self.table.resolve(logical, base)?;
        url.push_str(suffix);

        Ok(url)
    }

    /// Dispatches a GET and decodes the JSON response.
    pub(crate) async fn get_json(&self, logical: &str, suffix: &str) -> Result<Value> {
        self.get_json_as(logical, suffix, None).await
    }

    /// Dispatches a GET on behalf of another account user.
    pub(crate) async fn get_json_as(
        &self,
        logical: &str,
        suffix: &str,
        identity: Option<&UserIdentity>,
    ) -> Result<Value> {
        let url = self.url_for(logical, suffix).await?;

        tracing::debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if let Some((name, value)) = identity.and_then(UserIdentity::header) {
            request = request.header(name, value);
        }

        let response = self.send(request).await?;
        Self::read_json(response).await
    }

    /// Dispatches a GET and returns the raw response bytes.
    pub(crate) async fn get_bytes(&self, logical: &str, suffix: &str) -> Result<Vec<u8>> {
        let url = self.url_for(logical, suffix).await?;

        tracing::debug!(%url, "GET (raw)");

        let response = self.send(self.http.get(&url)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::request("Failed to read response body", e))?;

        Ok(bytes.to_vec())
    }

    /// Dispatches a JSON POST, optionally on behalf of another user.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        logical: &str,
        suffix: &str,
        body: &B,
        identity: Option<&UserIdentity>,
    ) -> Result<Value> {
        let url = self.url_for(logical, suffix).await?;

        tracing::debug!(%url, "POST");

        let mut request = self.http.post(&url).json(body);
        if let Some((name, value)) = identity.and_then(UserIdentity::header) {
            request = request.header(name, value);
        }

        let response = self.send(request).await?;
        Self::read_json(response).await
    }

    /// Dispatches a JSON PUT.
    pub(crate) async fn put_json<B: Serialize + ?Sized>(
        &self,
        logical: &str,
        suffix: &str,
        body: &B,
    ) -> Result<Value> {
        let url = self.url_for(logical, suffix).await?;

        tracing::debug!(%url, "PUT");

        let response = self.send(self.http.put(&url).json(body)).await?;
        Self::read_json(response).await
    }

    /// Dispatches a multipart POST (document upload).
    pub(crate) async fn post_multipart(&self, logical: &str, form: Form) -> Result<Value> {
        let url = self.url_for(logical, "").await?;

        tracing::debug!(%url, "POST (multipart)");

        let response = self.send(self.http.post(&url).multipart(form)).await?;
        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    async fn mock_discovery(server: &mut mockito::Server, hits: usize) -> mockito::Mock {
        let access_point = format!("{}/", server.url());
        server
            .mock("GET", "/api/rest/v5/base_uris")
            .match_header("access-token", "tok")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "api_access_point": access_point }).to_string())
            .expect(hits)
            .create_async()
            .await
    }

    fn client_for(server: &mockito::Server) -> EchosignClient {
        EchosignClient::new("tok").unwrap().with_api_host(server.url())
    }

    #[tokio::test]
    async fn test_base_uri_discovered_once_across_calls() {
        let mut server = mockito::Server::new_async().await;
        let discovery = mock_discovery(&mut server, 1).await;
        let users = server
            .mock("GET", "/api/rest/v5/users")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"userInfoList":[]}"#)
            .expect(2)
            .create_async()
            .await;

        let client = client_for(&server);
        client.get_json("user", "").await.unwrap();
        client.get_json("user", "").await.unwrap();

        discovery.assert_async().await;
        users.assert_async().await;
    }

    #[tokio::test]
    async fn test_unknown_endpoint_never_reaches_the_network() {
        let mut server = mockito::Server::new_async().await;
        let any = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.get_json("teleporter", "").await.unwrap_err();

        assert!(matches!(err, Error::UnknownEndpoint(_)));
        any.assert_async().await;
    }

    #[tokio::test]
    async fn test_fixed_base_uri_skips_discovery() {
        let mut server = mockito::Server::new_async().await;
        let discovery = server
            .mock("GET", "/api/rest/v5/base_uris")
            .expect(0)
            .create_async()
            .await;
        let users = server
            .mock("GET", "/api/rest/v5/users")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"userInfoList":[]}"#)
            .create_async()
            .await;

        let client = client_for(&server).with_fixed_base_uri(server.url());
        client.get_json("user", "").await.unwrap();

        discovery.assert_async().await;
        users.assert_async().await;
    }

    #[tokio::test]
    async fn test_discovery_without_access_point_is_unexpected_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/rest/v5/base_uris")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"something":"else"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.base_uri().await.unwrap_err();

        assert!(matches!(err, Error::UnexpectedResponse { .. }));
    }

    #[tokio::test]
    async fn test_http_error_surfaces_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        mock_discovery(&mut server, 1).await;
        server
            .mock("GET", "/api/rest/v5/agreements")
            .with_status(404)
            .with_body(r#"{"code":"INVALID_AGREEMENT_ID"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.get_json("agreement", "").await.unwrap_err();

        match err {
            Error::Request { message, source } => {
                assert!(message.contains("404"));
                assert!(message.contains("INVALID_AGREEMENT_ID"));
                assert!(source.is_none());
            }
            other => panic!("expected Request, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_post_sends_preferred_identity_header() {
        let mut server = mockito::Server::new_async().await;
        mock_discovery(&mut server, 1).await;
        let post = server
            .mock("POST", "/api/rest/v5/widgets")
            .match_header("x-user-id", "uid")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"widgetId":"w-1"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let identity = UserIdentity::new(Some("uid".into()), Some("a@b.com".into()));
        client
            .post_json("widget", "", &json!({ "widgetCreationInfo": {} }), Some(&identity))
            .await
            .unwrap();

        post.assert_async().await;
    }
}
