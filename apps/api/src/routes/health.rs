use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;
use crate::templates::TEMPLATES;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let preview_sessions = state.previews.count().await;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api",
        "pdfBackend": state.pdf_renderer.backend(),
        "templates": TEMPLATES.len(),
        "previewSessions": preview_sessions,
        "previewDebounceMs": state.config.preview_debounce_ms,
    }))
}
