//! # Analysis Endpoint Client
//!
//! HTTP client for the analysis service. The workflow reaches the endpoint
//! only through the [`AnalysisApi`] trait so tests can inject a fake client
//! and exercise the full submission path without network I/O.
//!
//! The wire contract: `POST {base}/upload` with a multipart body carrying the
//! four images under a single repeated `images` field. A 2xx response body is
//! the JSON success payload; any other status optionally carries
//! `{"error": "..."}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::analysis::AnalysisResult;
use crate::config::AnalysisEndpoint;
use crate::errors::{SubmitError, SubmitResult};
use crate::selection::ImageSelection;

/// Multipart field name the server expects the images under
const UPLOAD_FIELD: &str = "images";

/// Analysis can take a few minutes per image set; the timeout bounds a hung
/// connection, not a slow analysis
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Seam between the submission workflow and the analysis service
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Submit a selection for analysis and interpret the response.
    ///
    /// Implementations must issue at most one request per call and map every
    /// failure mode into a [`SubmitError`] rather than panicking.
    async fn analyze(&self, selection: &ImageSelection) -> SubmitResult<AnalysisResult>;
}

/// Non-2xx bodies optionally carry a structured error message
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Server-supplied error message from a response body, if there is a usable one
fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
}

/// reqwest-backed [`AnalysisApi`] implementation
pub struct HttpAnalysisClient {
    http: reqwest::Client,
    endpoint: AnalysisEndpoint,
}

impl HttpAnalysisClient {
    /// Create a client with the default request timeout
    pub fn new(endpoint: AnalysisEndpoint) -> SubmitResult<Self> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(endpoint: AnalysisEndpoint, timeout: Duration) -> SubmitResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(HttpAnalysisClient { http, endpoint })
    }

    pub fn endpoint(&self) -> &AnalysisEndpoint {
        &self.endpoint
    }

    /// Encode the selection as a multipart form, one part per image under the
    /// repeated `images` field, preserving selection order
    fn build_form(selection: &ImageSelection) -> SubmitResult<Form> {
        let mut form = Form::new();
        for file in selection.files() {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime_type)
                .map_err(|e| {
                    SubmitError::network(format!(
                        "Invalid MIME type '{}' for '{}': {}",
                        file.mime_type, file.file_name, e
                    ))
                })?;
            form = form.part(UPLOAD_FIELD, part);
        }
        Ok(form)
    }
}

#[async_trait]
impl AnalysisApi for HttpAnalysisClient {
    async fn analyze(&self, selection: &ImageSelection) -> SubmitResult<AnalysisResult> {
        let form = Self::build_form(selection)?;
        let url = self.endpoint.upload_url();
        debug!(url = %url, images = selection.len(), "Uploading intersection images");

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::network(e.to_string()))?;

        if !status.is_success() {
            let message = error_message_from_body(&body);
            warn!(status = status.as_u16(), "Analysis endpoint rejected the upload");
            return Err(SubmitError::http(status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|e| SubmitError::malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::ImageFile;

    #[test]
    fn test_error_message_extracted_from_body() {
        assert_eq!(
            error_message_from_body(r#"{"error":"invalid image format"}"#),
            Some("invalid image format".to_string())
        );
    }

    #[test]
    fn test_error_message_absent_or_unusable() {
        assert_eq!(error_message_from_body(r#"{"error":""}"#), None);
        assert_eq!(error_message_from_body(r#"{"status":"failed"}"#), None);
        assert_eq!(error_message_from_body("<html>502 Bad Gateway</html>"), None);
        assert_eq!(error_message_from_body(""), None);
    }

    #[test]
    fn test_build_form_accepts_a_full_selection() {
        let selection = ImageSelection::from_files(vec![
            ImageFile::new("north.jpg", "image/jpeg", vec![1]),
            ImageFile::new("south.jpg", "image/jpeg", vec![2]),
            ImageFile::new("west.png", "image/png", vec![3]),
            ImageFile::new("east.png", "image/png", vec![4]),
        ]);
        assert!(HttpAnalysisClient::build_form(&selection).is_ok());
    }

    #[test]
    fn test_build_form_rejects_bad_mime() {
        let selection = ImageSelection::from_files(vec![ImageFile::new(
            "north.jpg",
            "not a mime type",
            vec![1],
        )]);
        assert!(HttpAnalysisClient::build_form(&selection).is_err());
    }
}
