//
//  echosign
//  api/widgets.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! Widget operations: hosted signing forms and their documents, status, and
//! reports.

use std::path::Path;

use serde_json::Value;

use crate::api::{build_query, fetch_string, save_to_path, EchosignClient};
use crate::error::Result;
use crate::requests::{UserIdentity, Widget, WidgetPersonalization, WidgetStatus};

impl EchosignClient {
    /// Creates a widget and returns its `widgetId`.
    pub async fn create_widget(&self, widget: &Widget) -> Result<String> {
        let response = self.post_json("widget", "", widget, Some(widget.identity())).await?;

        fetch_string(&response, "widgetId")
    }

    /// Lists widgets, optionally on behalf of another account user.
    pub async fn get_widgets(&self, identity: Option<&UserIdentity>) -> Result<Value> {
        self.get_json_as("widget", "", identity).await
    }

    /// Gets detailed information about a single widget.
    pub async fn get_widget(&self, widget_id: &str) -> Result<Value> {
        self.get_json("widget", &format!("/{widget_id}")).await
    }

    /// Personalizes a widget for one signer, returning the personalized
    /// widget view.
    pub async fn personalize_widget(
        &self,
        widget_id: &str,
        personalization: &WidgetPersonalization,
    ) -> Result<Value> {
        self.put_json("widget", &format!("/{widget_id}/personalize"), personalization).await
    }

    /// Enables or disables a widget.
    pub async fn update_widget_status(
        &self,
        widget_id: &str,
        status: &WidgetStatus,
    ) -> Result<Value> {
        self.put_json("widget", &format!("/{widget_id}/status"), status).await
    }

    /// Lists the ids of the documents that make up a widget.
    pub async fn widget_documents(
        &self,
        widget_id: &str,
        version_id: Option<&str>,
        participant_email: Option<&str>,
    ) -> Result<Value> {
        let query = build_query(&[
            ("versionId", version_id.map(str::to_string)),
            ("participantEmail", participant_email.map(str::to_string)),
        ]);

        self.get_json("widget", &format!("/{widget_id}/documents{query}")).await
    }

    /// Downloads one document of a widget, saving it to `path` when one is
    /// given.
    pub async fn widget_document_file(
        &self,
        widget_id: &str,
        document_id: &str,
        path: Option<&Path>,
    ) -> Result<Vec<u8>> {
        let bytes = self
            .get_bytes("widget", &format!("/{widget_id}/documents/{document_id}"))
            .await?;
        save_to_path(path, &bytes).await?;

        Ok(bytes)
    }

    /// Downloads the audit trail PDF for a widget.
    pub async fn widget_audit_trail(
        &self,
        widget_id: &str,
        path: Option<&Path>,
    ) -> Result<Vec<u8>> {
        let bytes = self.get_bytes("widget", &format!("/{widget_id}/auditTrail")).await?;
        save_to_path(path, &bytes).await?;

        Ok(bytes)
    }

    /// Downloads the form-field data collected by a widget as CSV bytes.
    pub async fn widget_form_data(
        &self,
        widget_id: &str,
        path: Option<&Path>,
    ) -> Result<Vec<u8>> {
        let bytes = self.get_bytes("widget", &format!("/{widget_id}/formData")).await?;
        save_to_path(path, &bytes).await?;

        Ok(bytes)
    }
}
