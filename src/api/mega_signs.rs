//
//  echosign
//  api/mega_signs.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! Mega-sign batch operations: one document fanned out to many recipients,
//! each signing an independent copy.

use std::path::Path;

use serde_json::{json, Value};

use crate::api::{build_query, fetch_string, fetch_value, save_to_path, EchosignClient};
use crate::error::Result;
use crate::requests::MegaSign;

impl EchosignClient {
    /// Sends a mega-sign out for signature.
    ///
    /// Returns the new batch's `mega_signId` (the service really does mix
    /// snake and camel case in this one field).
    pub async fn create_mega_sign(&self, mega_sign: &MegaSign) -> Result<String> {
        let response = self
            .post_json("megaSign", "", mega_sign, Some(mega_sign.identity()))
            .await?;

        fetch_string(&response, "mega_signId")
    }

    /// Lists the caller's mega-sign batches.
    ///
    /// Returns the `userAgreementList` array.
    pub async fn get_mega_signs(&self) -> Result<Value> {
        let response = self.get_json("megaSign", "").await?;

        fetch_value(&response, "userAgreementList")
    }

    /// Gets detailed information about a single mega-sign batch.
    pub async fn mega_sign_info(&self, mega_sign_id: &str) -> Result<Value> {
        self.get_json("megaSign", &format!("/{mega_sign_id}")).await
    }

    /// Cancels an in-flight mega-sign batch, optionally notifying signers.
    ///
    /// Returns the service's `result` string.
    pub async fn cancel_mega_sign(
        &self,
        mega_sign_id: &str,
        notify_signer: bool,
        comment: Option<&str>,
    ) -> Result<String> {
        let mut body = json!({ "value": "CANCEL", "notifySigner": notify_signer });
        if let Some(comment) = comment {
            body["comment"] = Value::String(comment.to_string());
        }

        let response = self
            .put_json("megaSign", &format!("/{mega_sign_id}/status"), &body)
            .await?;

        fetch_string(&response, "result")
    }

    /// Lists the ids of the documents that make up a mega-sign batch.
    ///
    /// `version_id` selects a prior version, `participant_email` scopes the
    /// listing to one participant's view, and `supporting_document_format`
    /// controls the content format reported for supporting documents.
    pub async fn mega_sign_documents(
        &self,
        mega_sign_id: &str,
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

        self.get_json("megaSign", &format!("/{mega_sign_id}/documents{query}")).await
    }

    /// Downloads one document of a mega-sign batch, saving it to `path` when
    /// one is given.
    pub async fn mega_sign_document_file(
        &self,
        mega_sign_id: &str,
        document_id: &str,
        path: Option<&Path>,
    ) -> Result<Vec<u8>> {
        let bytes = self
            .get_bytes("megaSign", &format!("/{mega_sign_id}/documents/{document_id}"))
            .await?;
        save_to_path(path, &bytes).await?;

        Ok(bytes)
    }

    /// Gets the signing page URLs for a batch's current participants.
    pub async fn mega_sign_signing_urls(&self, mega_sign_id: &str) -> Result<Value> {
        self.get_json("megaSign", &format!("/{mega_sign_id}/signingUrls")).await
    }

    /// Downloads all of a batch's documents combined into one PDF.
    ///
    /// `audit_report` appends the audit trail; `attach_supporting_documents`
    /// includes uploaded supporting documents.
    pub async fn mega_sign_combined_pdf(
        &self,
        mega_sign_id: &str,
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
            .get_bytes("megaSign", &format!("/{mega_sign_id}/combinedDocument{query}"))
            .await?;
        save_to_path(path, &bytes).await?;

        Ok(bytes)
    }

    /// Downloads the form-field data collected across a batch as CSV bytes.
    pub async fn mega_sign_form_data(
        &self,
        mega_sign_id: &str,
        path: Option<&Path>,
    ) -> Result<Vec<u8>> {
        let bytes = self.get_bytes("megaSign", &format!("/{mega_sign_id}/formData")).await?;
        save_to_path(path, &bytes).await?;

        Ok(bytes)
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

    #[tokio::test]
    async fn test_create_mega_sign_extracts_mixed_case_id() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        let post = server
            .mock("POST", "/api/rest/v5/megaSigns")
            .match_body(mockito::Matcher::PartialJson(json!({
                "documentCreationInfo": { "name": "Bulk NDA" },
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"mega_signId":"m-1"}"#)
            .create_async()
            .await;

        let mega_sign = MegaSign::new(
            UserIdentity::inferred(),
            params(json!({
                "name": "Bulk NDA",
                "fileInfos": [{ "libraryDocumentId": "lib" }],
                "recipientSetInfos": [],
                "signatureType": "ESIGN",
            }))
            .unwrap(),
        )
        .unwrap();

        assert_eq!(client.create_mega_sign(&mega_sign).await.unwrap(), "m-1");
        post.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_mega_signs_unwraps_the_list() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        server
            .mock("GET", "/api/rest/v5/megaSigns")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"userAgreementList":[{"mega_signId":"m-1"}]}"#)
            .create_async()
            .await;

        let list = client.get_mega_signs().await.unwrap();
        assert_eq!(list[0]["mega_signId"], "m-1");
    }

    #[tokio::test]
    async fn test_cancel_mega_sign_omits_absent_comment() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        let put = server
            .mock("PUT", "/api/rest/v5/megaSigns/m-1/status")
            .match_body(mockito::Matcher::Json(json!({
                "value": "CANCEL",
                "notifySigner": false,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"result":"CANCELLED"}"#)
            .create_async()
            .await;

        let result = client.cancel_mega_sign("m-1", false, None).await.unwrap();

        assert_eq!(result, "CANCELLED");
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_mega_sign_documents_builds_optional_query() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        let get = server
            .mock(
                "GET",
                "/api/rest/v5/megaSigns/m-1/documents?participantEmail=a%40b.com&supportingDocumentContentFormat=ORIGINAL",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"documents":[]}"#)
            .create_async()
            .await;

        client
            .mega_sign_documents("m-1", None, Some("a@b.com"), Some("ORIGINAL"))
            .await
            .unwrap();

        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_mega_sign_combined_pdf_always_sends_boolean_flags() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        let get = server
            .mock(
                "GET",
                "/api/rest/v5/megaSigns/m-1/combinedDocument?attachSupportingDocuments=true&auditReport=false",
            )
            .with_status(200)
            .with_body(b"%PDF-1.4".as_slice())
            .create_async()
            .await;

        client
            .mega_sign_combined_pdf("m-1", None, None, true, false, None)
            .await
            .unwrap();

        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_mega_sign_document_file_saves_bytes() {
        let mut server = mockito::Server::new_async().await;
        let client = discovering_client(&mut server).await;
        server
            .mock("GET", "/api/rest/v5/megaSigns/m-1/documents/d-1")
            .with_status(200)
            .with_header("content-type", "application/pdf")
            .with_body(b"%PDF-1.4 copy".as_slice())
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copy.pdf");
        let bytes = client
            .mega_sign_document_file("m-1", "d-1", Some(&path))
            .await
            .unwrap();

        assert_eq!(bytes, b"%PDF-1.4 copy");
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }
}
