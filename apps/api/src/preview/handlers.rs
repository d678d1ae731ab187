//! Axum route handlers for the Preview API.

use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::models::resume::ResumeData;
use crate::preview::renderer::{PreviewInput, PreviewState};
use crate::render::handlers::DEFAULT_TEMPLATE;
use crate::state::AppState;
use crate::templates::{get_template_by_id, is_template_locked, SubscriptionStatus};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Upper bound on how long a GET may hold for a pending render.
const MAX_WAIT: Duration = Duration::from_secs(5);

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewQuery {
    /// Hold the response until this revision is rendered (bounded by `MAX_WAIT`).
    pub wait_for_revision: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    /// Omitted on open: the session starts from the sample resume.
    pub resume_data: Option<ResumeData>,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default)]
    pub subscription: SubscriptionStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPreviewResponse {
    pub session_id: Uuid,
    pub state: PreviewState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreviewResponse {
    pub session_id: Uuid,
    pub revision: u64,
}

/// Selecting a premium template without a premium subscription is refused.
/// Unknown ids pass: they render with the default theme.
fn check_template_access(template_id: &str, subscription: &SubscriptionStatus) -> Result<(), AppError> {
    match get_template_by_id(template_id) {
        Some(template) if is_template_locked(template, subscription) => Err(
            AppError::PremiumRequired(format!("Template '{}' requires a premium plan", template.id)),
        ),
        _ => Ok(()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/preview
pub async fn handle_open_preview(
    State(state): State<AppState>,
    AppJson(request): AppJson<PreviewRequest>,
) -> Result<(StatusCode, Json<OpenPreviewResponse>), AppError> {
    check_template_access(&request.template, &request.subscription)?;

    let input = PreviewInput {
        data: request.resume_data.unwrap_or_else(ResumeData::sample),
        template_id: request.template,
    };
    let session_id = state.previews.open(input).await?;
    let preview = state.previews.state(session_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(OpenPreviewResponse {
            session_id,
            state: preview,
        }),
    ))
}

/// PUT /api/v1/preview/:id
///
/// Queues an edit. Rendering happens once the edits stop for the debounce interval.
pub async fn handle_update_preview(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<Uuid>,
    AppJson(request): AppJson<PreviewRequest>,
) -> Result<(StatusCode, Json<UpdatePreviewResponse>), AppError> {
    check_template_access(&request.template, &request.subscription)?;

    let data = request
        .resume_data
        .ok_or_else(|| AppError::BadRequest("resumeData is required".to_string()))?;
    let revision = state
        .previews
        .update(
            session_id,
            PreviewInput {
                data,
                template_id: request.template,
            },
        )
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(UpdatePreviewResponse {
            session_id,
            revision,
        }),
    ))
}

/// GET /api/v1/preview/:id
///
/// Current state, or with `?waitForRevision=N` the state once edit N has rendered.
pub async fn handle_get_preview(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<Uuid>,
    AppQuery(query): AppQuery<PreviewQuery>,
) -> Result<Json<PreviewState>, AppError> {
    let preview = match query.wait_for_revision {
        Some(revision) => {
            state
                .previews
                .wait_for_revision(session_id, revision, MAX_WAIT)
                .await?
        }
        None => state.previews.state(session_id).await?,
    };
    Ok(Json(preview))
}

/// DELETE /api/v1/preview/:id
pub async fn handle_close_preview(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state.previews.close(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
