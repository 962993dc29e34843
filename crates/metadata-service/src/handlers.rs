//! API request handlers for the Metadata Service

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mood_art::{GenerationError, MetadataSource, TokenMetadata};
use std::sync::Arc;
use tracing::{error, info};

use crate::AppState;

/// Message returned for every generation failure
pub const GENERATION_FAILED: &str = "Failed to generate metadata";

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });

        (self.status, Json(body)).into_response()
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        error!("Error generating metadata: {}", err);

        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: GENERATION_FAILED.to_string(),
        }
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "metadata-service"
    }))
}

/// Metadata for a token
///
/// GET /metadata/{token_id}
pub async fn metadata_handler(
    State(state): State<Arc<AppState>>,
    Path(token_id): Path<String>,
) -> Result<Json<TokenMetadata>, ApiError> {
    info!("Generating metadata for token: {}", token_id);

    let metadata = state.source.generate(&token_id)?;

    Ok(Json(metadata))
}
