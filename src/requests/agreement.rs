//
//  echosign
//  requests/agreement.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! Agreement request bodies: the agreement creation envelope plus the
//! recipient, file-reference, and form-field shapes that nest inside it.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::requests::UserIdentity;
use crate::validate::{require_exactly_one, require_keys, Params};

/// Agreement creation request.
///
/// Wraps the caller's parameters under `documentCreationInfo` as the REST API
/// expects. Required parameters:
///
/// - `name` — agreement name shown in emails and on the manage page
/// - `fileInfos` — list of [`FileInfo`]-shaped file references; multiple
///   files are combined before sending
/// - `recipientSetInfos` — list of [`RecipientSet`] / [`Recipient`] values
/// - `signatureType` — `ESIGN` or `WRITTEN`
///
/// Everything else (message, locale, security options, form fields, ...) is
/// passed through untouched.
///
/// # Example
///
/// ```rust
/// use echosign::requests::{Agreement, Recipient, UserIdentity};
/// use echosign::validate::params;
/// use serde_json::json;
///
/// let recipient =
///     Recipient::new(params(json!({ "role": "SIGNER", "email": "a@b.com" })).unwrap()).unwrap();
/// let agreement = Agreement::new(
///     UserIdentity::inferred(),
///     params(json!({
///         "name": "NDA",
///         "fileInfos": [{ "transientDocumentId": "3AAA..." }],
///         "recipientSetInfos": [recipient],
///         "signatureType": "ESIGN",
///     }))
///     .unwrap(),
/// )
/// .unwrap();
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Agreement {
    #[serde(rename = "documentCreationInfo")]
    document_creation_info: Params,
    #[serde(skip)]
    identity: UserIdentity,
}

impl Agreement {
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

    /// The user on whose behalf the agreement is created.
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }
}

/// A single agreement recipient, addressed by email or by fax.
///
/// Serializes to the nested shape the agreement creation call expects:
/// `{ recipientSetMemberInfos: { email | fax }, recipientSetRole: role }`.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Recipient(Params);

impl Recipient {
    /// Validates the parameters and builds the recipient shape.
    ///
    /// `role` is `SIGNER` or `APPROVER`; exactly one of `email` / `fax` must
    /// be present (both or neither is rejected).
    ///
    /// # Errors
    ///
    /// Returns [`Error::AmbiguousKey`](crate::Error::AmbiguousKey) unless
    /// exactly one of `email` / `fax` is present.
    pub fn new(params: Params) -> Result<Self> {
        require_exactly_one(&["email", "fax"], &params)?;

        let member = if let Some(email) = params.get("email") {
            serde_json::json!({ "email": email })
        } else {
            serde_json::json!({ "fax": params["fax"] })
        };

        let mut body = Params::new();
        body.insert("recipientSetMemberInfos".to_string(), member);
        body.insert(
            "recipientSetRole".to_string(),
            params.get("role").cloned().unwrap_or(Value::Null),
        );

        Ok(Self(body))
    }
}

/// A recipient set: one role shared by one or more members who can each
/// complete the signing step.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RecipientSet(Params);

impl RecipientSet {
    /// Requires `recipientSetRole` and `recipientSetMemberInfos`.
    pub fn new(params: Params) -> Result<Self> {
        require_keys(&["recipientSetRole", "recipientSetMemberInfos"], &params)?;

        Ok(Self(params))
    }
}

/// One member of a [`RecipientSet`], addressed by email.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RecipientSetMember(Params);

impl RecipientSetMember {
    /// Requires `email`.
    pub fn new(params: Params) -> Result<Self> {
        require_keys(&["email"], &params)?;

        Ok(Self(params))
    }
}

/// Secondary authentication options for a recipient.
///
/// `authenticationMethod` is one of `INHERITED_FROM_DOCUMENT`, `KBA`,
/// `PASSWORD`, `WEB_IDENTITY`, `PHONE`, or `NONE`; `phoneInfos` and
/// `password` supply the method-specific material.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RecipientSecurityOption(Params);

impl RecipientSecurityOption {
    /// Requires `authenticationMethod`.
    pub fn new(params: Params) -> Result<Self> {
        require_keys(&["authenticationMethod"], &params)?;

        Ok(Self(params))
    }
}

/// A reference to one file included in an agreement or widget.
///
/// The four reference kinds are mutually exclusive: a file is identified by
/// `transientDocumentId`, `libraryDocumentId`, `libraryDocumentName`, or a
/// `documentURL` object, never more than one.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FileInfo(Params);

impl FileInfo {
    /// Requires exactly one of the four file-reference keys.
    pub fn new(params: Params) -> Result<Self> {
        require_exactly_one(
            &["documentURL", "libraryDocumentId", "libraryDocumentName", "transientDocumentId"],
            &params,
        )?;

        Ok(Self(params))
    }
}

/// Pixel-level placement of a form field on a page.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FormFieldLocation(Params);

impl FormFieldLocation {
    /// Requires `pageNumber` (1-based), `left`, `top`, `width`, and `height`.
    pub fn new(params: Params) -> Result<Self> {
        require_keys(&["pageNumber", "left", "top", "width", "height"], &params)?;

        Ok(Self(params))
    }
}

/// A form field requested on the agreement documents, given either by
/// explicit `locations` or by a named field.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RequestFormField(Params);

impl RequestFormField {
    /// Requires exactly one of `locations` / `name`.
    pub fn new(params: Params) -> Result<Self> {
        require_exactly_one(&["locations", "name"], &params)?;

        Ok(Self(params))
    }
}

/// A signing reminder for an in-flight agreement.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Reminder(Params);

impl Reminder {
    /// Requires `agreementId`; an optional `comment` is passed through.
    pub fn new(params: Params) -> Result<Self> {
        require_keys(&["agreementId"], &params)?;

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
    fn test_recipient_email_shape() {
        let recipient =
            Recipient::new(params(json!({ "role": "SIGNER", "email": "a@b.com" })).unwrap())
                .unwrap();

        assert_eq!(
            serde_json::to_value(&recipient).unwrap(),
            json!({
                "recipientSetMemberInfos": { "email": "a@b.com" },
                "recipientSetRole": "SIGNER",
            })
        );
    }

    #[test]
    fn test_recipient_fax_shape() {
        let recipient =
            Recipient::new(params(json!({ "role": "APPROVER", "fax": "555-0100" })).unwrap())
                .unwrap();

        assert_eq!(
            serde_json::to_value(&recipient).unwrap(),
            json!({
                "recipientSetMemberInfos": { "fax": "555-0100" },
                "recipientSetRole": "APPROVER",
            })
        );
    }

    #[test]
    fn test_recipient_with_both_email_and_fax_is_rejected() {
        let err = Recipient::new(
            params(json!({ "role": "SIGNER", "email": "a@b.com", "fax": "555-0100" })).unwrap(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::AmbiguousKey { found: 2, .. }));
    }

    #[test]
    fn test_agreement_requires_creation_keys() {
        let err = Agreement::new(
            UserIdentity::inferred(),
            params(json!({ "name": "NDA", "fileInfos": [] })).unwrap(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::MissingKey(_)));
    }

    #[test]
    fn test_agreement_wraps_document_creation_info() {
        let agreement = Agreement::new(
            UserIdentity::inferred(),
            params(json!({
                "name": "NDA",
                "fileInfos": [{ "transientDocumentId": "3AAA" }],
                "recipientSetInfos": [],
                "signatureType": "ESIGN",
            }))
            .unwrap(),
        )
        .unwrap();

        let body = serde_json::to_value(&agreement).unwrap();
        assert_eq!(body["documentCreationInfo"]["name"], "NDA");
        assert_eq!(body["documentCreationInfo"]["signatureType"], "ESIGN");
    }

    #[test]
    fn test_file_info_exactly_one_reference() {
        assert!(FileInfo::new(params(json!({ "transientDocumentId": "3AAA" })).unwrap()).is_ok());
        assert!(FileInfo::new(params(json!({})).unwrap()).is_err());
        assert!(FileInfo::new(
            params(json!({ "transientDocumentId": "3AAA", "libraryDocumentId": "lib" })).unwrap()
        )
        .is_err());
    }

    #[test]
    fn test_form_field_location_requires_full_geometry() {
        let complete = params(
            json!({ "pageNumber": 1, "left": 100, "top": 100, "width": 72, "height": 25 }),
        )
        .unwrap();
        assert!(FormFieldLocation::new(complete).is_ok());

        let missing = params(json!({ "pageNumber": 1, "left": 100 })).unwrap();
        assert!(matches!(FormFieldLocation::new(missing), Err(Error::MissingKey(_))));
    }

    #[test]
    fn test_request_form_field_locations_or_name() {
        assert!(RequestFormField::new(params(json!({ "name": "signature" })).unwrap()).is_ok());
        assert!(RequestFormField::new(
            params(json!({ "name": "signature", "locations": [] })).unwrap()
        )
        .is_err());
    }

    #[test]
    fn test_reminder_requires_agreement_id() {
        assert!(Reminder::new(params(json!({ "agreementId": "2AAA" })).unwrap()).is_ok());
        assert!(Reminder::new(params(json!({ "comment": "please sign" })).unwrap()).is_err());
    }
}
