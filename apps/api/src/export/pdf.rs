//! PDF backends behind one trait, chosen at startup from config.
//!
//! Default: `BrowserPrintRenderer` returns the print-ready HTML and lets the
//! browser's "Save as PDF" produce the file.
//! With `PDF_RENDER_URL` set: `ChromiumServiceRenderer` posts the document to a
//! Gotenberg-compatible headless Chromium service and returns real PDF bytes.
//!
//! `AppState` holds an `Arc<dyn PdfRenderer>`.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::export::print::wrap_for_download;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

const CHROMIUM_HTML_ROUTE: &str = "/forms/chromium/convert/html";

#[derive(Debug, Error)]
pub enum PdfRenderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PDF service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("PDF service returned an empty document")]
    Empty,
}

/// The file handed back to the client.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Bytes,
    pub content_type: &'static str,
    pub filename: String,
}

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Turns a finished document into the downloadable artifact.
    async fn render(&self, html: &str, filename: &str) -> Result<ExportArtifact, PdfRenderError>;

    /// Backend name, for logs and `/health`.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// BrowserPrintRenderer (default)
// ────────────────────────────────────────────────────────────────────────────

/// Serves HTML under the PDF filename; the browser print dialog makes the PDF.
pub struct BrowserPrintRenderer;

#[async_trait]
impl PdfRenderer for BrowserPrintRenderer {
    async fn render(&self, html: &str, filename: &str) -> Result<ExportArtifact, PdfRenderError> {
        Ok(ExportArtifact {
            bytes: Bytes::from(wrap_for_download(html)),
            content_type: HTML_CONTENT_TYPE,
            filename: filename.to_string(),
        })
    }

    fn backend(&self) -> &'static str {
        "browser-print"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ChromiumServiceRenderer: headless Chromium over HTTP
// ────────────────────────────────────────────────────────────────────────────

/// Single attempt per export: a failure is reported once, never retried.
#[derive(Clone)]
pub struct ChromiumServiceRenderer {
    client: Client,
    endpoint: String,
}

impl ChromiumServiceRenderer {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PdfRenderError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CHROMIUM_HTML_ROUTE),
        })
    }
}

#[async_trait]
impl PdfRenderer for ChromiumServiceRenderer {
    async fn render(&self, html: &str, filename: &str) -> Result<ExportArtifact, PdfRenderError> {
        let index = Part::text(html.to_string())
            .file_name("index.html")
            .mime_str("text/html")?;
        let form = Form::new()
            .part("files", index)
            .text("paperWidth", "8.5")
            .text("paperHeight", "11")
            .text("marginTop", "0")
            .text("marginBottom", "0")
            .text("marginLeft", "0")
            .text("marginRight", "0")
            .text("printBackground", "true");

        debug!(endpoint = %self.endpoint, bytes = html.len(), "Posting document to PDF service");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Gotenberg-Output-Filename", filename.trim_end_matches(".pdf"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "PDF service rejected document");
            return Err(PdfRenderError::Service {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(PdfRenderError::Empty);
        }

        Ok(ExportArtifact {
            bytes,
            content_type: PDF_CONTENT_TYPE,
            filename: filename.to_string(),
        })
    }

    fn backend(&self) -> &'static str {
        "chromium-service"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Multipart, http::StatusCode, routing::post, Router};

    async fn spawn_fake_service(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn fake_convert(mut multipart: Multipart) -> (StatusCode, Vec<u8>) {
        let mut saw_index = false;
        while let Some(field) = multipart.next_field().await.unwrap() {
            if field.name() == Some("files") && field.file_name() == Some("index.html") {
                let body = field.text().await.unwrap();
                saw_index = body.contains("<html");
            }
        }
        if saw_index {
            (StatusCode::OK, b"%PDF-1.7 fake".to_vec())
        } else {
            (StatusCode::BAD_REQUEST, b"missing index.html".to_vec())
        }
    }

    #[tokio::test]
    async fn test_browser_print_wraps_html() {
        let artifact = BrowserPrintRenderer
            .render("<html><body></body></html>", "resume-x.pdf")
            .await
            .unwrap();
        assert_eq!(artifact.content_type, HTML_CONTENT_TYPE);
        assert_eq!(artifact.filename, "resume-x.pdf");
        let body = String::from_utf8(artifact.bytes.to_vec()).unwrap();
        assert!(body.contains("Print Resume"));
    }

    #[tokio::test]
    async fn test_chromium_service_returns_pdf_bytes() {
        let base = spawn_fake_service(Router::new().route(CHROMIUM_HTML_ROUTE, post(fake_convert))).await;
        let renderer = ChromiumServiceRenderer::new(&base, Duration::from_secs(5)).unwrap();

        let artifact = renderer
            .render("<html><body>hi</body></html>", "resume-ada.pdf")
            .await
            .unwrap();
        assert_eq!(artifact.content_type, PDF_CONTENT_TYPE);
        assert!(artifact.bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_chromium_service_error_message_is_kept() {
        let router = Router::new().route(
            CHROMIUM_HTML_ROUTE,
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "chromium is restarting") }),
        );
        let base = spawn_fake_service(router).await;
        let renderer = ChromiumServiceRenderer::new(&format!("{base}/"), Duration::from_secs(5)).unwrap();

        match renderer.render("<html></html>", "resume.pdf").await {
            Err(PdfRenderError::Service { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "chromium is restarting");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_chromium_service_empty_body_is_error() {
        let router = Router::new().route(CHROMIUM_HTML_ROUTE, post(|| async { StatusCode::OK }));
        let base = spawn_fake_service(router).await;
        let renderer = ChromiumServiceRenderer::new(&base, Duration::from_secs(5)).unwrap();

        assert!(matches!(
            renderer.render("<html></html>", "resume.pdf").await,
            Err(PdfRenderError::Empty)
        ));
    }
}
