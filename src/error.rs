//
//  echosign
//  error.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! # Unified Error Type
//!
//! Every fallible operation in this crate returns [`Error`]. The variants map
//! one-to-one onto the failure classes of the EchoSign client:
//!
//! | Variant | Class | Retryable |
//! |---------|-------|-----------|
//! | `MissingKey`, `AmbiguousKey`, `InvalidArgument`, `UnknownEndpoint` | caller mistake | never |
//! | `TokenExchange`, `Refresh`, `Revocation` | authentication | no (repeating an invalid grant will not succeed) |
//! | `Request` | transport or non-2xx API response | caller's policy |
//! | `UnexpectedResponse` | response shape | no |
//! | `Io` | local file convenience side effects | caller's policy |
//!
//! Validation errors are raised before any network call is made, and a raw
//! `reqwest::Error` is never surfaced directly; it is always attached as the
//! source of one of the variants above.

use thiserror::Error;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error type for all EchoSign client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required key was absent from a request-parameter container.
    ///
    /// Names the first missing key. Presence means "key exists": a key mapped
    /// to a `null` or empty value still satisfies the requirement.
    #[error("Missing required key: {0}")]
    MissingKey(String),

    /// A parameter container did not contain exactly one of a candidate key set.
    ///
    /// Raised both when none of the candidates is present and when two or
    /// more are.
    #[error("Expected exactly one of {candidates:?}, found {found}")]
    AmbiguousKey {
        /// The candidate key set that was checked.
        candidates: Vec<String>,
        /// How many of the candidates were actually present.
        found: usize,
    },

    /// A caller-supplied argument was malformed or a precondition was not met.
    ///
    /// Examples: an unparseable redirect URI, refreshing without a refresh
    /// token, or building a client from credentials that never completed a
    /// token exchange.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The authorization-code exchange failed.
    ///
    /// Covers transport failures during the exchange, non-2xx responses from
    /// the token endpoint, and responses missing required token fields. The
    /// previously stored credential state is left untouched.
    #[error("Token exchange failed: {reason}")]
    TokenExchange {
        /// Upstream response body or transport failure summary.
        reason: String,
        /// Transport-level cause, when the failure happened below HTTP.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A refresh-grant request failed or returned a body without `access_token`.
    #[error("Token refresh failed: {reason}")]
    Refresh {
        /// Upstream response body or transport failure summary.
        reason: String,
        /// Transport-level cause, when the failure happened below HTTP.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A token revocation was rejected by the provider.
    #[error("Token revocation failed: {reason}")]
    Revocation {
        /// Upstream response body or transport failure summary.
        reason: String,
        /// Transport-level cause, when the failure happened below HTTP.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A logical endpoint name is not present in the active endpoint table.
    ///
    /// This is a programmer error, raised before any network call; resource
    /// clients only dispatch names the table defines.
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// An API request failed at the transport level or with a non-2xx status.
    ///
    /// Connection failures, timeouts, and TLS errors all land here with the
    /// underlying `reqwest::Error` attached; HTTP-level failures carry the
    /// status and response body in the message instead.
    #[error("Request failed: {message}")]
    Request {
        /// Human-readable summary including status and body when available.
        message: String,
        /// Underlying transport error, absent for HTTP-level failures.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The call succeeded at the protocol level but the body did not have the
    /// expected shape.
    #[error("Unexpected response: missing `{field}`")]
    UnexpectedResponse {
        /// The field (or shape, e.g. "valid JSON") that was expected.
        field: String,
        /// The offending response body, for logging.
        body: String,
    },

    /// Writing downloaded bytes to a caller-supplied file path failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wraps a transport failure into [`Error::Request`].
    pub(crate) fn request(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request { message: message.into(), source: Some(source) }
    }

    /// Builds an [`Error::Request`] for a non-2xx API response.
    pub(crate) fn api(status: reqwest::StatusCode, body: &str) -> Self {
        Self::Request {
            message: format!("EchoSign API error ({status}): {body}"),
            source: None,
        }
    }
}
