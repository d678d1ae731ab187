//! Axum route handlers for the Render API.

use anyhow::anyhow;
use axum::{response::Html, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::resume::ResumeData;
use crate::render::try_render_document;

pub const DEFAULT_TEMPLATE: &str = "modern";

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

/// `{resumeData, template}`, the body shared by render, validate and export.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    #[serde(default)]
    pub resume_data: ResumeData,
    #[serde(default = "default_template")]
    pub template: String,
}

/// Runs the assembler off the async workers.
pub async fn render_blocking(data: ResumeData, template: String) -> Result<String, AppError> {
    let html = tokio::task::spawn_blocking(move || try_render_document(&data, &template))
        .await
        .map_err(|e| AppError::Internal(anyhow!("render task failed: {e}")))??;
    Ok(html)
}

/// POST /api/v1/render
///
/// Returns the canonical document, the same bytes the preview shows.
pub async fn handle_render(AppJson(request): AppJson<DocumentRequest>) -> Result<Html<String>, AppError> {
    debug!(template = %request.template, "Rendering document");
    let html = render_blocking(request.resume_data, request.template).await?;
    Ok(Html(html))
}

/// GET /api/v1/resumes/sample
///
/// The data a new builder session starts from.
pub async fn handle_sample() -> Json<ResumeData> {
    Json(ResumeData::sample())
}
