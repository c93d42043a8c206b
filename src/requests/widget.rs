//
//  echosign
//  requests/widget.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! Widget request bodies: the creation envelope, personalization, and status
//! updates.

use serde::Serialize;

use crate::error::Result;
use crate::requests::UserIdentity;
use crate::validate::{require_keys, Params};

/// Widget creation request.
///
/// A widget is a hosted signing form that can be embedded in a page or
/// linked directly. The caller's parameters are wrapped under
/// `widgetCreationInfo`. Required parameters:
///
/// - `name` — identifies the widget in emails and on the website
/// - `fileInfos` — list of file references making up the widget document;
///   library documents are not permitted here
/// - `signatureFlow` — `SENDER_SIGNATURE_NOT_REQUIRED` or `SENDER_SIGNS_LAST`
///
/// Optional parameters (`widgetCompletionInfo`, `securityOptions`, `locale`,
/// `callbackInfo`, ...) are passed through untouched.
#[derive(Debug, Clone, Serialize)]
pub struct Widget {
    #[serde(rename = "widgetCreationInfo")]
    widget_creation_info: Params,
    #[serde(skip)]
    identity: UserIdentity,
}

impl Widget {
    /// Validates the parameters and builds the creation envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`](crate::Error::MissingKey) if any of
    /// `name`, `fileInfos`, `signatureFlow` is absent.
    pub fn new(identity: UserIdentity, params: Params) -> Result<Self> {
        require_keys(&["name", "fileInfos", "signatureFlow"], &params)?;

        Ok(Self { widget_creation_info: params, identity })
    }

    /// The user on whose behalf the widget is created.
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }
}

/// Personalizes a widget for one signer email.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct WidgetPersonalization(Params);

impl WidgetPersonalization {
    /// Requires `email`.
    pub fn new(params: Params) -> Result<Self> {
        require_keys(&["email"], &params)?;

        Ok(Self(params))
    }
}

/// Widget status update (`ENABLE` / `DISABLE`), with an optional message or
/// redirect URL shown to visitors of a disabled widget.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct WidgetStatus(Params);

impl WidgetStatus {
    /// Requires `value`.
    pub fn new(params: Params) -> Result<Self> {
        require_keys(&["value"], &params)?;

        Ok(Self(params))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Error;
    use crate::validate::params;

    #[test]
    fn test_widget_wraps_creation_info() {
        let widget = Widget::new(
            UserIdentity::from_email("sender@example.com"),
            params(json!({
                "name": "Signup form",
                "fileInfos": [{ "transientDocumentId": "3AAA" }],
                "signatureFlow": "SENDER_SIGNATURE_NOT_REQUIRED",
            }))
            .unwrap(),
        )
        .unwrap();

        let body = serde_json::to_value(&widget).unwrap();
        assert_eq!(body["widgetCreationInfo"]["name"], "Signup form");
        assert!(body.get("identity").is_none());
    }

    #[test]
    fn test_widget_requires_signature_flow() {
        let err = Widget::new(
            UserIdentity::inferred(),
            params(json!({ "name": "Signup form", "fileInfos": [] })).unwrap(),
        )
        .unwrap_err();

        match err {
            Error::MissingKey(key) => assert_eq!(key, "signatureFlow"),
            other => panic!("expected MissingKey, got {other:?}"),
        }
    }

    #[test]
    fn test_widget_status_requires_value() {
        assert!(WidgetStatus::new(params(json!({ "value": "DISABLE" })).unwrap()).is_ok());
        assert!(WidgetStatus::new(params(json!({ "message": "gone" })).unwrap()).is_err());
    }
}
