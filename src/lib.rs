//
//  echosign
//  lib.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! # EchoSign Client Library
//!
//! An async client for the Adobe EchoSign REST API: send documents for
//! signature, track and cancel agreements, run mega-sign batches, host
//! signing widgets, and manage users.
//!
//! ## Overview
//!
//! The crate is split along the request lifecycle:
//!
//! - [`auth`]: OAuth2 authorization-code flow ([`Credentials`]) — authorize
//!   URL construction, code exchange, refresh, and revocation
//! - [`api`]: the session handle ([`EchosignClient`]) with per-account
//!   base-URI discovery, plus one module of operations per REST resource
//! - [`requests`]: typed request bodies that validate their parameters at
//!   construction, before any network activity
//! - [`validate`]: the parameter-validation primitives the request bodies
//!   are built on
//! - [`error`]: the crate-wide [`Error`] type
//!
//! ## Getting Started
//!
//! ```rust,no_run
//! use echosign::api::EchosignClient;
//! use echosign::requests::{Agreement, UserIdentity};
//! use echosign::validate::params;
//! use serde_json::json;
//!
//! # async fn example() -> echosign::Result<()> {
//! let client = EchosignClient::new("access-token")?;
//!
//! let document_id = client
//!     .create_transient_document("nda.pdf", "application/pdf", std::fs::read("nda.pdf")?)
//!     .await?;
//!
//! let agreement = Agreement::new(
//!     UserIdentity::inferred(),
//!     params(json!({
//!         "name": "NDA",
//!         "fileInfos": [{ "transientDocumentId": document_id }],
//!         "recipientSetInfos": [{
//!             "recipientSetMemberInfos": { "email": "signer@example.com" },
//!             "recipientSetRole": "SIGNER",
//!         }],
//!         "signatureType": "ESIGN",
//!     }))?,
//! )?;
//!
//! let agreement_id = client.create_agreement(&agreement).await?;
//! println!("sent agreement {agreement_id}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod error;
pub mod requests;
pub mod validate;

pub use api::{ApiVersion, EchosignClient, API_HOST};
pub use auth::{Credentials, TokenKind};
pub use error::{Error, Result};

/// Crate version, reported in the `User-Agent` of every request.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
