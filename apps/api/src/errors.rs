use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::pdf::PdfRenderError;
use crate::render::RenderError;

const GENERATION_MESSAGE: &str = "Failed to generate resume";
const PDF_FALLBACK_MESSAGE: &str = "Failed to export resume. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Every violated rule, in the order the gate reports them.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request could not be extracted (bad JSON, wrong types, bad path or query).
    #[error("Rejected request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Premium required: {0}")]
    PremiumRequired(String),

    #[error("Generation error: {0}")]
    Generation(#[from] RenderError),

    #[error("PDF backend error: {0}")]
    PdfBackend(#[from] PdfRenderError),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details: Option<Vec<String>> = None;

        let (status, code, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Validation(errors) => {
                details = Some(errors);
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Please fix the highlighted fields before exporting".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::Rejected { status, message } => {
                tracing::debug!(%status, "Rejected request: {message}");
                (status, "INVALID_REQUEST", message)
            }
            AppError::PremiumRequired(msg) => (StatusCode::FORBIDDEN, "PREMIUM_REQUIRED", msg),
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_ERROR",
                    GENERATION_MESSAGE.to_string(),
                )
            }
            AppError::PdfBackend(e) => {
                tracing::error!("PDF backend error: {e}");
                // An upstream message is passed through as-is.
                let message = match e {
                    PdfRenderError::Service { message, .. } if !message.is_empty() => message,
                    _ => PDF_FALLBACK_MESSAGE.to_string(),
                };
                (StatusCode::BAD_GATEWAY, "PDF_BACKEND_ERROR", message)
            }
            AppError::Unavailable(msg) => {
                tracing::warn!("Service unavailable: {msg}");
                (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE", msg)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = json!(details);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_lists_every_message() {
        let (status, body) = body_json(AppError::Validation(vec![
            "Full name is required".to_string(),
            "At least one skill is required".to_string(),
        ]))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["details"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_generation_error_is_generic() {
        let (status, body) = body_json(AppError::Generation(RenderError::Empty)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], GENERATION_MESSAGE);
    }

    #[tokio::test]
    async fn test_pdf_service_message_passed_through() {
        let (status, body) = body_json(AppError::PdfBackend(PdfRenderError::Service {
            status: 500,
            message: "chromium crashed".to_string(),
        }))
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["message"], "chromium crashed");

        let (_, body) = body_json(AppError::PdfBackend(PdfRenderError::Empty)).await;
        assert_eq!(body["error"]["message"], PDF_FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_rejection_keeps_status_in_envelope() {
        let (status, body) = body_json(AppError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "invalid type: string \"Rust\", expected a sequence".into(),
        })
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_REQUEST");
        assert!(body["error"]["message"].as_str().unwrap().contains("expected a sequence"));
    }

    #[tokio::test]
    async fn test_not_found_has_no_details() {
        let (status, body) = body_json(AppError::NotFound("Template x not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].get("details").is_none());
    }
}
