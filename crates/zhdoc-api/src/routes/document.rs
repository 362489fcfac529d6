use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use zhdoc_common::types::Document;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/document", post(segment_document))
}

#[derive(Debug, Deserialize)]
struct DocumentRequest {
    text: String,
}

/// Segment Chinese text into the paragraph/sentence/word tree.
///
/// Empty text is not an error; it yields a document with no paragraphs.
async fn segment_document(
    State(state): State<AppState>,
    Json(req): Json<DocumentRequest>,
) -> Result<Json<Document>, ApiError> {
    tracing::info!(chars = req.text.chars().count(), "Segmenting document");

    let document = state.assembler.assemble(&req.text).await?;

    tracing::info!(
        paragraphs = document.paragraphs.len(),
        "Document segmented"
    );
    Ok(Json(document))
}
