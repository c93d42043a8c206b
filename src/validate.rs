//
//  echosign
//  validate.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! # Request-Parameter Validation
//!
//! EchoSign request bodies are built from open key/value containers
//! ([`Params`]) that each typed request wrapper validates at construction
//! time. This module holds the two structural checks every wrapper uses:
//!
//! - [`require_keys`]: every named key must be present
//! - [`require_exactly_one`]: exactly one of a candidate set must be present
//!
//! Both are pure gates: they never mutate the container, and on success they
//! return nothing. A container that passed construction therefore always
//! satisfies its declared key contract and is never re-validated downstream.
//!
//! "Present" means the key exists in the map. A key mapped to `null` or an
//! empty string still counts as present; value emptiness is deliberately not
//! policed here.
//!
//! # Example
//!
//! ```rust
//! use echosign::validate::{params, require_keys, require_exactly_one};
//! use serde_json::json;
//!
//! let recipient = params(json!({ "role": "SIGNER", "email": "a@b.com" })).unwrap();
//! require_keys(&["role"], &recipient).unwrap();
//! require_exactly_one(&["email", "fax"], &recipient).unwrap();
//! ```

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// An open request-parameter container: JSON field name to JSON value.
pub type Params = Map<String, Value>;

/// Converts a JSON value into a [`Params`] container.
///
/// This is a convenience for building containers with `serde_json::json!`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is not a JSON object.
pub fn params(value: Value) -> Result<Params> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidArgument(format!(
            "request parameters must be a JSON object, got {other}"
        ))),
    }
}

/// Checks that every key in `required` is present in `params`.
///
/// # Errors
///
/// Returns [`Error::MissingKey`] naming the first missing key.
pub fn require_keys(required: &[&str], params: &Params) -> Result<()> {
    for key in required {
        if !params.contains_key(*key) {
            return Err(Error::MissingKey((*key).to_string()));
        }
    }

    Ok(())
}

/// Checks that exactly one key from `candidates` is present in `params`.
///
/// Zero present candidates fails, and so do two or more; "at least one" is
/// not good enough for the request shapes this guards (e.g. a recipient is
/// addressed by email or by fax, never both).
///
/// # Errors
///
/// Returns [`Error::AmbiguousKey`] carrying the candidate set and the count
/// actually found.
pub fn require_exactly_one(candidates: &[&str], params: &Params) -> Result<()> {
    let found = candidates.iter().filter(|key| params.contains_key(**key)).count();

    if found != 1 {
        return Err(Error::AmbiguousKey {
            candidates: candidates.iter().map(|key| (*key).to_string()).collect(),
            found,
        });
    }

    Ok(())
}
