//! Axum route handlers for CV extraction.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::acquisition::{extract_text_from_upload, AcquisitionError};
use crate::errors::AppError;
use crate::extraction::{extract_candidate_info, CandidateRecord};
use crate::ner::EntityTagger;
use crate::state::AppState;

/// Multipart part carrying the document.
const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractionResponse {
    pub status: &'static str,
    pub data: CandidateRecord,
}

impl ExtractionResponse {
    fn success(data: CandidateRecord) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

struct Upload {
    file_name: String,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /upload-cv/
///
/// Accepts a multipart form with a `file` part (PDF or DOCX), extracts its
/// text and returns the candidate fields found in it.
pub async fn handle_upload_cv(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractionResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    let upload_dir = state.config.upload_dir.clone();
    let tagger = Arc::clone(&state.tagger);
    let file_name = upload.file_name.clone();

    // Temp file write, document parsing and the cascade are all blocking.
    let record = tokio::task::spawn_blocking(move || {
        extract_from_upload(&upload, &upload_dir, tagger.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in upload: {e}")))??;

    if record.is_empty() {
        info!("No candidate fields found in '{}'", file_name);
    } else {
        info!("Extracted {} fields from '{}'", record.len(), file_name);
    }
    Ok(Json(ExtractionResponse::success(record)))
}

/// POST /api/v1/extract
///
/// Runs the field cascade on text the caller already has. Empty text yields
/// an empty record.
pub async fn handle_extract_text(
    State(state): State<AppState>,
    Json(request): Json<ExtractTextRequest>,
) -> Result<Json<ExtractionResponse>, AppError> {
    let tagger = Arc::clone(&state.tagger);

    let record =
        tokio::task::spawn_blocking(move || extract_candidate_info(&request.text, tagger.as_ref()))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
            })?;

    info!("Extracted {} fields from text", record.len());
    Ok(Json(ExtractionResponse::success(record)))
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Uploaded file has no file name".to_string()))?;
        let bytes = field.bytes().await?;
        return Ok(Upload { file_name, bytes });
    }
    Err(AppError::Validation(format!("Missing '{FILE_FIELD}' form field")))
}

fn extract_from_upload(
    upload: &Upload,
    upload_dir: &Path,
    tagger: &dyn EntityTagger,
) -> Result<CandidateRecord, AcquisitionError> {
    let text = extract_text_from_upload(&upload.bytes, &upload.file_name, upload_dir)?;
    Ok(extract_candidate_info(&text, tagger))
}
