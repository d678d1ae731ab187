pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::preview::handlers as preview;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        // Resume data
        .route("/api/v1/resumes/sample", get(render::handle_sample))
        .route("/api/v1/resumes/validate", post(export::handle_validate))
        // Rendering
        .route("/api/v1/render", post(render::handle_render))
        .route("/api/v1/export/pdf", post(export::handle_export_pdf))
        .route("/api/v1/export/print", post(export::handle_export_print))
        // Live preview
        .route("/api/v1/preview", post(preview::handle_open_preview))
        .route(
            "/api/v1/preview/:id",
            get(preview::handle_get_preview)
                .put(preview::handle_update_preview)
                .delete(preview::handle_close_preview),
        )
        .with_state(state)
}
