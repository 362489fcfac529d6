use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use zhdoc_pipeline::PipelineError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("internal error: {0}")]
    Internal(String),
    #[error("upstream extraction failed: {0}")]
    Upstream(String),
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match &err {
            PipelineError::Estimate(_) => ApiError::Internal(err.to_string()),
            PipelineError::Extraction(_) => ApiError::Upstream(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Internal(_) => {
                tracing::error!(error = %self, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::Upstream(_) => {
                tracing::error!(error = %self, "Extraction upstream error");
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
        };

        let body = axum::Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
