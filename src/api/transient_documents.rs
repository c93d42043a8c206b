//
//  echosign
//  api/transient_documents.rs
//
//  Copyright (c) 2026 the echosign-rs authors. All rights reserved.
//

//! Transient document upload.
//!
//! A transient document is a file uploaded ahead of agreement or widget
//! creation; the returned id is valid for a short window and is referenced
//! from a `fileInfos` entry via `transientDocumentId`.

use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::api::{fetch_string, EchosignClient};
use crate::error::{Error, Result};

impl EchosignClient {
    /// Uploads a document as a multipart form and returns its
    /// `transientDocumentId`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `mime_type` is not a parseable
    /// mime type, and the usual transport/protocol errors otherwise.
    pub async fn create_transient_document(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        let file = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|_| Error::InvalidArgument(format!("invalid mime type: {mime_type}")))?;

        let form = Form::new()
            .text("File-Name", file_name.to_string())
            .text("Mime-Type", mime_type.to_string())
            .part("File", file);

        let response = self.post_multipart("transientDocument", form).await?;

        fetch_string(&response, "transientDocumentId")
    }

    /// Reads `path` and uploads it as a transient document.
    ///
    /// The file name sent to the service is the final component of `path`.
    pub async fn create_transient_document_from_path(
        &self,
        path: &Path,
        mime_type: &str,
    ) -> Result<String> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidArgument(format!("unusable file path: {}", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;

        self.create_transient_document(&file_name, mime_type, bytes).await
    }
}
