//
//  echosign
//  requests/mega_sign.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! Mega-sign request body: one document sent to many recipients, each of
//! whom receives their own copy to sign.

use serde::Serialize;

use crate::error::Result;
use crate::requests::UserIdentity;
use crate::validate::{require_keys, Params};

/// Mega-sign creation request.
///
/// Shares the agreement creation-info shape: the caller's parameters are
/// wrapped under `documentCreationInfo`, with each entry of
/// `recipientSetInfos` fanned out into an independent agreement. Required
/// parameters are the same as for
/// [`Agreement`](crate::requests::Agreement): `name`, `fileInfos`,
/// `recipientSetInfos`, `signatureType`.
#[derive(Debug, Clone, Serialize)]
pub struct MegaSign {
    #[serde(rename = "documentCreationInfo")]
    document_creation_info: Params,
    #[serde(skip)]
    identity: UserIdentity,
}

impl MegaSign {
    /// Validates the parameters and builds the creation envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`](crate::Error::MissingKey) if any of
    /// `fileInfos`, `recipientSetInfos`, `signatureType`, `name` is absent.
    pub fn new(identity: UserIdentity, params: Params) -> Result<Self> {
        require_keys(&["fileInfos", "recipientSetInfos", "signatureType", "name"], &params)?;

        Ok(Self { document_creation_info: params, identity })
    }

    /// The user on whose behalf the mega-sign is created.
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }
}
