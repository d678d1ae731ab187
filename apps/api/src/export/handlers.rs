//! Axum route handlers for the Export API.

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::export::print::{export_filename, wrap_for_print};
use crate::export::validation::{validate_resume_data, ValidationResult};
use crate::render::handlers::{render_blocking, DocumentRequest};
use crate::state::AppState;

/// POST /api/v1/resumes/validate
///
/// Always 200; the verdict is in the body.
pub async fn handle_validate(AppJson(request): AppJson<DocumentRequest>) -> Json<ValidationResult> {
    Json(validate_resume_data(&request.resume_data))
}

fn ensure_valid(request: &DocumentRequest) -> Result<(), AppError> {
    let result = validate_resume_data(&request.resume_data);
    if result.is_valid {
        Ok(())
    } else {
        Err(AppError::Validation(result.errors))
    }
}

/// POST /api/v1/export/pdf
///
/// Validation gate → canonical document → configured PDF backend.
/// The response is an attachment named `resume-<slug>.pdf`.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    AppJson(request): AppJson<DocumentRequest>,
) -> Result<Response, AppError> {
    ensure_valid(&request)?;

    let filename = export_filename(request.resume_data.display_name());
    let template = request.template.clone();
    let html = render_blocking(request.resume_data, request.template).await?;
    let artifact = state.pdf_renderer.render(&html, &filename).await?;

    info!(
        template = %template,
        backend = state.pdf_renderer.backend(),
        bytes = artifact.bytes.len(),
        "Exported resume"
    );

    Ok((
        [
            (CONTENT_TYPE, artifact.content_type.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.filename),
            ),
        ],
        artifact.bytes,
    )
        .into_response())
}

/// POST /api/v1/export/print
///
/// The document with a script that opens the print dialog on load, for the
/// client to show in a new window.
pub async fn handle_export_print(
    AppJson(request): AppJson<DocumentRequest>,
) -> Result<Html<String>, AppError> {
    ensure_valid(&request)?;

    let template = request.template.clone();
    let html = render_blocking(request.resume_data, request.template).await?;
    info!(template = %template, "Prepared print document");
    Ok(Html(wrap_for_print(&html)))
}
