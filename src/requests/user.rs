//
//  echosign
//  requests/user.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! User creation request body.

use serde::Serialize;

use crate::error::Result;
use crate::validate::{require_keys, Params};

/// User creation request for the current application's account.
///
/// Requires `email`, `firstName`, and `lastName`; optional parameters
/// (`groupId`, `title`, `company`, `phone`, ...) are passed through.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct User(Params);

impl User {
    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`](crate::Error::MissingKey) if any of
    /// `email`, `firstName`, `lastName` is absent.
    pub fn new(params: Params) -> Result<Self> {
        require_keys(&["email", "firstName", "lastName"], &params)?;

        Ok(Self(params))
    }
}
