//
//  echosign
//  auth/credentials.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! # OAuth 2.0 Credentials
//!
//! Implements the EchoSign token lifecycle: authorization-URL construction,
//! authorization-code exchange, access-token refresh, and token revocation.
//!
//! A [`Credentials`] value moves through three states:
//!
//! ```text
//! Unauthenticated --get_token--> Authorized --revoke_token--> Revoked
//!                                    |  ^
//!                        refresh_access_token (rotates the access token)
//! ```
//!
//! All token fields are `None` until a successful exchange, and a failed
//! exchange or refresh never partially overwrites previously valid state.
//!
//! EchoSign shards accounts across regional OAuth hosts (`secure.na1`,
//! `secure.na2`, ...); use [`Credentials::with_oauth_site`] when your
//! application is registered on a different shard than the default.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

/// Default OAuth host. Accounts on other shards override this via
/// [`Credentials::with_oauth_site`].
pub const OAUTH_SITE: &str = "https://secure.na2.echosign.com";

/// Authorization endpoint path on the OAuth host.
const AUTHORIZE_PATH: &str = "/public/oauth";

/// Token-exchange endpoint path on the OAuth host.
const TOKEN_PATH: &str = "/oauth/token";

/// Refresh-grant endpoint path on the OAuth host.
const REFRESH_PATH: &str = "/oauth/refresh";

/// Revocation endpoint path on the OAuth host.
const REVOKE_PATH: &str = "/oauth/revoke";

/// Selects which stored token a [`Credentials::revoke_token`] call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The short-lived bearer token attached to API calls.
    Access,
    /// The longer-lived token used to obtain new access tokens.
    Refresh,
}

/// Successful token-exchange response from the provider.
///
/// All three fields are required; a response missing any of them fails the
/// exchange without touching previously stored state.
#[derive(Deserialize)]
struct TokenResponseRaw {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
}

/// OAuth 2.0 credentials and token state for one EchoSign application.
///
/// Create once per application integration, then drive the lifecycle with
/// [`get_token`](Self::get_token), [`refresh_access_token`](Self::refresh_access_token),
/// and [`revoke_token`](Self::revoke_token). Nothing is ever persisted to
/// disk; all state lives in this value for the life of the process.
///
/// Mutating operations take `&mut self`. If a `Credentials` is shared across
/// concurrent tasks, wrap it in a lock so no caller observes a half-updated
/// token during a refresh.
///
/// # Example
///
/// ```rust,no_run
/// use echosign::auth::Credentials;
///
/// # async fn example() -> echosign::Result<()> {
/// let mut credentials = Credentials::new("client-id", "client-secret")?;
/// let token = credentials
///     .get_token("https://example.com/oauth/callback", "authorization-code")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    oauth_site: String,
    http: reqwest::Client,
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl Credentials {
    /// Creates credentials for an application registered with EchoSign.
    ///
    /// No network call is made; the value starts unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("echosign/{}", crate::VERSION))
            .build()
            .map_err(|e| Error::request("Failed to build HTTP client", e))?;

        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            oauth_site: OAUTH_SITE.to_string(),
            http,
            access_token: None,
            refresh_token: None,
            expires_at: None,
        })
    }

    /// Overrides the OAuth host, e.g. for a regional shard.
    pub fn with_oauth_site(mut self, site: impl Into<String>) -> Self {
        self.oauth_site = site.into().trim_end_matches('/').to_string();
        self
    }

    /// The currently stored access token, if a token exchange has succeeded.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// The currently stored refresh token, if a token exchange has succeeded.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// When the current access token expires, if one is stored.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Whether the stored access token has expired (or none is stored).
    pub fn expired(&self) -> bool {
        self.expires_at.map(|at| at <= Utc::now()).unwrap_or(true)
    }

    /// Builds the authorization-request URL for EchoSign's OAuth 2.0 provider.
    ///
    /// Pure URL construction; no network call is made. The `redirect_uri`
    /// must match one registered on the application's OAuth configuration
    /// page, `scope` is the space-delimited permission set to request, and
    /// `state` is echoed back to the redirect URI untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the redirect URI (or a
    /// caller-overridden OAuth host) cannot be parsed as a URL.
    pub fn authorize_url(
        &self,
        redirect_uri: &str,
        scope: &str,
        state: Option<&str>,
    ) -> Result<String> {
        Url::parse(redirect_uri)
            .map_err(|e| Error::InvalidArgument(format!("invalid redirect URI: {e}")))?;

        let mut url = Url::parse(&self.oauth_site)
            .map_err(|e| Error::InvalidArgument(format!("invalid OAuth site: {e}")))?;
        url.set_path(AUTHORIZE_PATH);
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", scope);

        if let Some(state) = state {
            url.query_pairs_mut().append_pair("state", state);
        }

        Ok(url.into())
    }

    /// Exchanges an authorization code for an access/refresh token pair.
    ///
    /// On success stores the access token, the refresh token, and an
    /// `expires_at` timestamp of now plus the provider's `expires_in`, then
    /// returns the access token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenExchange`] on transport failure, a non-2xx
    /// response, or a response missing any of the required token fields.
    /// Previously stored tokens are never partially overwritten: either the
    /// whole response is adopted, or none of it is.
    pub async fn get_token(&mut self, redirect_uri: &str, code: &str) -> Result<String> {
        let form = [
            ("grant_type", "authorization_code"),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ];

        let response = self
            .http
            .post(format!("{}{}", self.oauth_site, TOKEN_PATH))
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::TokenExchange {
                reason: "transport failure during authorization-code exchange".to_string(),
                source: Some(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TokenExchange {
                reason: format!("HTTP {status}: {body}"),
                source: None,
            });
        }

        let raw: TokenResponseRaw = response.json().await.map_err(|e| Error::TokenExchange {
            reason: "token response is missing required fields".to_string(),
            source: Some(e),
        })?;

        tracing::debug!(expires_in = raw.expires_in, "authorization-code exchange succeeded");

        self.access_token = Some(raw.access_token.clone());
        self.refresh_token = Some(raw.refresh_token);
        self.expires_at = Some(Utc::now() + Duration::seconds(raw.expires_in));

        Ok(raw.access_token)
    }

    /// Obtains a new access token using the refresh grant.
    ///
    /// If `current_refresh_token` is supplied it replaces the stored refresh
    /// token before the request is made. On success the access token and
    /// expiry are overwritten; the refresh token is replaced only when the
    /// response carries a new one, otherwise the stored one is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if no refresh token is available,
    /// and [`Error::Refresh`] on transport failure, a non-2xx response, or a
    /// response body that is not a JSON object containing `access_token`. In
    /// every failure case the previously stored access token is untouched.
    pub async fn refresh_access_token(
        &mut self,
        current_refresh_token: Option<&str>,
    ) -> Result<String> {
        if let Some(token) = current_refresh_token {
            self.refresh_token = Some(token.to_string());
        }

        let refresh_token = self
            .refresh_token
            .clone()
            .ok_or_else(|| Error::InvalidArgument("no refresh token to refresh with".to_string()))?;

        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", &refresh_token),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
        ];

        let response = self
            .http
            .post(format!("{}{}", self.oauth_site, REFRESH_PATH))
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::Refresh {
                reason: "transport failure during refresh grant".to_string(),
                source: Some(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Refresh { reason: format!("HTTP {status}: {body}"), source: None });
        }

        let body: Value = response.json().await.map_err(|e| Error::Refresh {
            reason: "refresh response is not valid JSON".to_string(),
            source: Some(e),
        })?;

        let Some(object) = body.as_object() else {
            return Err(Error::Refresh {
                reason: format!("refresh response is not a JSON object: {body}"),
                source: None,
            });
        };

        let access_token = object
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Refresh {
                reason: format!("refresh response has no access_token: {body}"),
                source: None,
            })?
            .to_string();

        // The provider includes expires_in on every observed refresh; fall
        // back to an hour if it is ever omitted.
        let expires_in = object.get("expires_in").and_then(Value::as_i64).unwrap_or(3600);

        if let Some(new_refresh) = object.get("refresh_token").and_then(Value::as_str) {
            tracing::debug!("refresh grant rotated the refresh token");
            self.refresh_token = Some(new_refresh.to_string());
        }

        tracing::debug!(expires_in, "refresh grant succeeded");

        self.access_token = Some(access_token.clone());
        self.expires_at = Some(Utc::now() + Duration::seconds(expires_in));

        Ok(access_token)
    }

    /// Revokes the selected token (and any corresponding tokens upstream).
    ///
    /// On success the selected stored token is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the selected token is not
    /// stored, and [`Error::Revocation`] on transport failure, a non-2xx
    /// response, or a response body containing an `error` member. The stored
    /// token is retained on failure.
    pub async fn revoke_token(&mut self, which: TokenKind) -> Result<()> {
        let token = match which {
            TokenKind::Access => self.access_token.clone(),
            TokenKind::Refresh => self.refresh_token.clone(),
        }
        .ok_or_else(|| {
            Error::InvalidArgument(format!("no {which:?} token to revoke").to_lowercase())
        })?;

        let response = self
            .http
            .post(format!("{}{}", self.oauth_site, REVOKE_PATH))
            .form(&[("token", token.as_str())])
            .send()
            .await
            .map_err(|e| Error::Revocation {
                reason: "transport failure during revocation".to_string(),
                source: Some(e),
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(Error::Revocation { reason: format!("HTTP {status}: {body}"), source: None });
        }

        // A successful revocation returns an empty body; an error report is a
        // JSON object with an `error` member.
        if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(&body) {
            if object.contains_key("error") {
                return Err(Error::Revocation { reason: body, source: None });
            }
        }

        tracing::debug!(?which, "token revoked");

        match which {
            TokenKind::Access => self.access_token = None,
            TokenKind::Refresh => self.refresh_token = None,
        }

        Ok(())
    }
}
