//
//  echosign
//  api/agreements.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! Agreement operations: creation, status, document and report downloads,
//! and signing reminders.

use std::path::Path;

use serde_json::{json, Value};

use crate::api::{build_query, fetch_string, fetch_value, save_to_path, EchosignClient};
use crate::error::Result;
use crate::requests::{Agreement, Reminder};

impl EchosignClient {
    /// Sends an agreement out for signature.
    ///
    /// Returns the new agreement's `agreementId`.
    pub async fn create_agreement(&self, agreement: &Agreement) -> Result<String> {
        let response = self
            .post_json("agreement", "", agreement, Some(agreement.identity()))
            .await?;

        fetch_string(&response, "agreementId")
    }

    /// Lists the caller's agreements, most recent first.
    ///
    /// Returns the `userAgreementList` array.
    pub async fn get_agreements(&self) -> Result<Value> {
        let response = self.get_json("agreement", "").await?;

        fetch_value(&response, "userAgreementList")
    }

    /// Gets detailed information about a single agreement.
    pub async fn agreement_info(&self, agreement_id: &str) -> Result<Value> {
        self.get_json("agreement", &format!("/{agreement_id}")).await
    }

    /// Cancels an in-flight agreement, optionally notifying the signer.
    ///
    /// Returns the service's `result` string (`CANCELLED` on success).
    pub async fn cancel_agreement(
        &self,
        agreement_id: &str,
        notify_signer: bool,
        comment: Option<&str>,
    ) -> Result<String> {
        let mut body = json!({ "value": "CANCEL", "notifySigner": notify_signer });
        if let Some(comment) = comment {
            body["comment"] = Value::String(comment.to_string());
        }

        let response = self
            .put_json("agreement", &format!("/{agreement_id}/status"), &body)
            .await?;

        fetch_string(&response, "result")
    }

    /// Lists the ids of the documents that make up an agreement.
    ///
    /// `version_id` selects a prior version, `participant_email` scopes the
    /// listing to one participant's view, and `supporting_document_format`
    /// controls the content format reported for supporting documents.
    pub async fn agreement_documents(
        &self,
        agreement_id: &str,
        version_id: Option<&str>,
        participant_email: Option<&str>,
        supporting_document_format: Option<&str>,
    ) -> Result<Value> {
        let query = build_query(&[
            ("versionId", version_id.map(str::to_string)),
            ("participantEmail", participant_email.map(str::to_string)),
            (
                "supportingDocumentContentFormat",
                supporting_document_format.map(str::to_string),
            ),
        ]);

        self.get_json("agreement", &format!("/{agreement_id}/documents{query}")).await
    }

    /// Downloads one document of an agreement, saving it to `path` when one
    /// is given.
    pub async fn agreement_document_file(
        &self,
        agreement_id: &str,
        document_id: &str,
        path: Option<&Path>,
    ) -> Result<Vec<u8>> {
        let bytes = self
            .get_bytes("agreement", &format!("/{agreement_id}/documents/{document_id}"))
            .await?;
        save_to_path(path, &bytes).await?;

        Ok(bytes)
    }

    /// Downloads the audit trail PDF for an agreement.
    pub async fn audit_trail_pdf(
        &self,
        agreement_id: &str,
        path: Option<&Path>,
    ) -> Result<Vec<u8>> {
        let bytes = self
            .get_bytes("agreement", &format!("/{agreement_id}/auditTrail"))
            .await?;
        save_to_path(path, &bytes).await?;

        Ok(bytes)
    }

    /// Gets the signing page URLs for an agreement's current participants.
    pub async fn agreement_signing_urls(&self, agreement_id: &str) -> Result<Value> {
        self.get_json("agreement", &format!("/{agreement_id}/signingUrls")).await
    }

    /// Downloads all of an agreement's documents combined into one PDF.
    ///
    /// `audit_report` appends the audit trail; `attach_supporting_documents`
    /// includes uploaded supporting documents.
    pub async fn agreement_combined_pdf(
        &self,
        agreement_id: &str,
        version_id: Option<&str>,
        participant_email: Option<&str>,
        attach_supporting_documents: bool,
        audit_report: bool,
        path: Option<&Path>,
    ) -> Result<Vec<u8>> {
        let query = build_query(&[
            ("versionId", version_id.map(str::to_string)),
            ("participantEmail", participant_email.map(str::to_string)),
            (
                "attachSupportingDocuments",
                Some(attach_supporting_documents.to_string()),
            ),
            ("auditReport", Some(audit_report.to_string())),
        ]);

        let bytes = self
            .get_bytes("agreement", &format!("/{agreement_id}/combinedDocument{query}"))
            .await?;
        save_to_path(path, &bytes).await?;

        Ok(bytes)
    }

    /// Downloads the form-field data entered into an agreement as CSV bytes.
    pub async fn agreement_form_data(
        &self,
        agreement_id: &str,
        path: Option<&Path>,
    ) -> Result<Vec<u8>> {
        let bytes = self.get_bytes("agreement", &format!("/{agreement_id}/formData")).await?;
        save_to_path(path, &bytes).await?;

        Ok(bytes)
    }

    /// Sends a signing reminder to an agreement's current signer.
    ///
    /// Returns the service's `result` string.
    pub async fn create_reminder(&self, reminder: &Reminder) -> Result<String> {
        let response = self.post_json("reminder", "", reminder, None).await?;

        fetch_string(&response, "result")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::requests::UserIdentity;
    use crate::validate::params;

    async fn discovering_client(server: &mut mockito::Server) -> EchosignClient {
        let access_point = format!("{}/", server.url());
        server
            .mock("GET", "/api/rest/v5/base_uris")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "api_access_point": access_point }).to_string())
            .create_async()
            .await;

        EchosignClient::new("tok").unwrap().with_api_host(server.url())
    }

    fn sample_agreement(identity: UserIdentity) -> Agreement {
        Agreement::new(
            identity,
            params(json!({
                "name": "NDA",
                "fileInfos": [{ "transientDocumentId": "3AAA" }],
                "recipientSetInfos": [],
                "signatureType": "ESIGN",
            }))
            .unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_agreement_posts_envelope_and_extracts_id() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        let post = server
            .mock("POST", "/api/rest/v5/agreements")
            .match_header("access-token", "tok")
            .match_header("x-user-id", "uid")
            .match_body(mockito::Matcher::PartialJson(json!({
                "documentCreationInfo": { "name": "NDA", "signatureType": "ESIGN" },
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"agreementId":"2AAA"}"#)
            .create_async()
            .await;

        let agreement = sample_agreement(UserIdentity::from_id("uid"));
        assert_eq!(client.create_agreement(&agreement).await.unwrap(), "2AAA");
        post.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_agreements_unwraps_the_list() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        server
            .mock("GET", "/api/rest/v5/agreements")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"userAgreementList":[{"agreementId":"2AAA"}]}"#)
            .create_async()
            .await;

        let list = client.get_agreements().await.unwrap();
        assert_eq!(list[0]["agreementId"], "2AAA");
    }

    #[tokio::test]
    async fn test_cancel_agreement_puts_status_and_extracts_result() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        let put = server
            .mock("PUT", "/api/rest/v5/agreements/2AAA/status")
            .match_body(mockito::Matcher::Json(json!({
                "value": "CANCEL",
                "notifySigner": true,
                "comment": "no longer needed",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"result":"CANCELLED"}"#)
            .create_async()
            .await;

        let result = client
            .cancel_agreement("2AAA", true, Some("no longer needed"))
            .await
            .unwrap();

        assert_eq!(result, "CANCELLED");
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_agreement_documents_builds_optional_query() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        let get = server
            .mock(
                "GET",
                "/api/rest/v5/agreements/2AAA/documents?versionId=7&participantEmail=a%40b.com",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"documents":[]}"#)
            .create_async()
            .await;

        client
            .agreement_documents("2AAA", Some("7"), Some("a@b.com"), None)
            .await
            .unwrap();

        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_audit_trail_pdf_saves_bytes_to_path() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        server
            .mock("GET", "/api/rest/v5/agreements/2AAA/auditTrail")
            .with_status(200)
            .with_header("content-type", "application/pdf")
            .with_body(b"%PDF-1.4 audit".as_slice())
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.pdf");
        let bytes = client.audit_trail_pdf("2AAA", Some(&path)).await.unwrap();

        assert_eq!(bytes, b"%PDF-1.4 audit");
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 audit");
    }

    #[tokio::test]
    async fn test_combined_pdf_always_sends_boolean_flags() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        let get = server
            .mock(
                "GET",
                "/api/rest/v5/agreements/2AAA/combinedDocument?attachSupportingDocuments=false&auditReport=true",
            )
            .with_status(200)
            .with_body(b"%PDF-1.4".as_slice())
            .create_async()
            .await;

        client
            .agreement_combined_pdf("2AAA", None, None, false, true, None)
            .await
            .unwrap();

        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_reminder_extracts_result() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        server
            .mock("POST", "/api/rest/v5/reminders")
            .match_body(mockito::Matcher::Json(json!({ "agreementId": "2AAA" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"result":"SENT"}"#)
            .create_async()
            .await;

        let reminder = Reminder::new(params(json!({ "agreementId": "2AAA" })).unwrap()).unwrap();
        assert_eq!(client.create_reminder(&reminder).await.unwrap(), "SENT");
    }
}
