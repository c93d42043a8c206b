//
//  echosign
//  api/mod.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! # API Client Layer
//!
//! The HTTP-facing half of the crate: the session handle and request
//! dispatcher ([`client`]), the logical-endpoint resolver ([`endpoint`]), and
//! one thin resource module per REST area.
//!
//! ## Architecture
//!
//! - [`client`]: [`EchosignClient`] owns the bearer token, the lazily
//!   discovered per-account base URI, and the generic GET/POST/PUT dispatch
//!   path with auth-header injection and error normalization.
//! - [`endpoint`]: versioned logical-name → path table.
//! - [`users`], [`agreements`], [`widgets`], [`mega_signs`],
//!   [`transient_documents`]: one `async` method per REST operation, each
//!   validating input, dispatching, and extracting the documented response
//!   field.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use echosign::api::EchosignClient;
//!
//! # async fn example() -> echosign::Result<()> {
//! let client = EchosignClient::new("access-token")?;
//! let agreements = client.get_agreements().await?;
//! # Ok(())
//! # }
//! ```

/// Session handle and request dispatcher.
pub mod client;

/// Versioned endpoint tables and URL resolution.
pub mod endpoint;

/// Agreement operations (create, status, documents, reminders).
pub mod agreements;

/// Mega-sign batch operations.
pub mod mega_signs;

/// Transient document upload.
pub mod transient_documents;

/// User management operations.
pub mod users;

/// Widget operations.
pub mod widgets;

pub use client::EchosignClient;
pub use endpoint::{ApiVersion, API_HOST};

use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Extracts a required string field from a decoded JSON response.
///
/// The call nominally succeeded at the protocol level by the time this runs,
/// so a missing field is an [`Error::UnexpectedResponse`], distinct from any
/// transport failure.
pub(crate) fn fetch_string(value: &Value, field: &str) -> Result<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::UnexpectedResponse { field: field.to_string(), body: value.to_string() })
}

/// Extracts a required field of any shape from a decoded JSON response.
pub(crate) fn fetch_value(value: &Value, field: &str) -> Result<Value> {
    value.get(field).cloned().ok_or_else(|| Error::UnexpectedResponse {
        field: field.to_string(),
        body: value.to_string(),
    })
}

/// Writes downloaded bytes to `path` when one is given.
///
/// Convenience side effect for the document/PDF/CSV download methods; when
/// `path` is `None` nothing touches the filesystem.
pub(crate) async fn save_to_path(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    if let Some(path) = path {
        tokio::fs::write(path, bytes).await?;
    }

    Ok(())
}

/// Builds a query string from optional pairs, skipping absent values.
///
/// Returns an empty string when every value is absent, otherwise
/// `?key=value&key=value` in input order. Values are form-urlencoded; keys
/// are fixed identifiers and used as-is.
pub(crate) fn build_query(pairs: &[(&str, Option<String>)]) -> String {
    let mut query = String::new();

    for (key, value) in pairs {
        let Some(value) = value else { continue };
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(key);
        query.push('=');
        query.extend(url::form_urlencoded::byte_serialize(value.as_bytes()));
    }

    query
}
