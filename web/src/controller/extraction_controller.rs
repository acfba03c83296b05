//! Controller for action-item extraction requests.
//!
//! The single meaningful endpoint: accepts a file reference, runs the
//! extraction pipeline, and returns the resulting task records.

use crate::controller::ExtractionResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use domain::extractor as ExtractorApi;
use domain::SourceKind;
use log::*;
use serde::Deserialize;
use service::config::ApiVersion;
use std::path::Path;
use utoipa::ToSchema;

/// Request body for an extraction run.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExtractionRequest {
    /// Origin type of the referenced file: "audio", "video" or "text".
    pub file_type: String,
    /// Path to the input file, readable by the server process.
    pub file_path: String,
}

/// POST /extract-action-items
///
/// Extract action items from the referenced meeting recording or transcript.
#[utoipa::path(
    post,
    path = "/extract-action-items",
    params(ApiVersion),
    request_body = ExtractionRequest,
    responses(
        (status = 200, description = "Extraction succeeded", body = ExtractionResponse),
        (status = 404, description = "Input file not found"),
        (status = 422, description = "Unsupported file type"),
        (status = 502, description = "A transcription or annotation provider failed"),
        (status = 500, description = "Internal Server Error"),
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(request): Json<ExtractionRequest>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Extract action items from: {:?}", request);

    let source = request.file_type.parse::<SourceKind>()?;

    let tasks = ExtractorApi::extract_tasks_from_file(
        app_state.transcriber(),
        app_state.media_extractor(),
        app_state.annotator(),
        source,
        Path::new(&request.file_path),
    )
    .await?;

    info!("Extracted {} task(s) from {} input", tasks.len(), source);

    Ok(Json(ExtractionResponse::new(tasks)))
}
