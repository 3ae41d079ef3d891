use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::acquisition::AcquisitionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AcquisitionError> for AppError {
    fn from(err: AcquisitionError) -> Self {
        match err {
            AcquisitionError::UnsupportedFormat { .. } => AppError::UnsupportedFormat(err.to_string()),
            AcquisitionError::Pdf { .. } | AcquisitionError::Docx { .. } => {
                AppError::UnreadableDocument(err.to_string())
            }
            AcquisitionError::Io { .. } => AppError::Internal(err.into()),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Validation(format!("Malformed multipart body: {}", err.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFormat(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                msg.clone(),
            ),
            AppError::UnreadableDocument(msg) => {
                tracing::warn!("Unreadable document: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UNREADABLE_DOCUMENT",
                    msg.clone(),
                )
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

        let body = Json(json!({
            "status": "error",
            "code": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
