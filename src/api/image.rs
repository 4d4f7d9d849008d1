use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api::require_field;
use crate::errors::AppError;
use crate::models::image::{
    PredictionInput, PredictionRequest, PredictionResponse, RemoveBackgroundRequest,
    RemoveBackgroundResponse,
};
use crate::proxy::status;
use crate::AppState;

/// POST /api/v1/remove-background
///
/// Forwards an image reference to the background-removal model and
/// returns the processed image reference. The provider holds the
/// connection open (`Prefer: wait`) so no poll loop is needed here.
pub async fn remove_background(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RemoveBackgroundRequest>,
) -> Result<Json<RemoveBackgroundResponse>, AppError> {
    let image_url = require_field(payload.image_url.as_deref(), "imageUrl")?.to_string();

    let token = state
        .config
        .removal_api_token
        .as_deref()
        .ok_or(AppError::Configuration(
            "background-removal credential is not configured",
        ))?;

    let body = PredictionRequest {
        version: state.config.removal_model_version.clone(),
        input: PredictionInput { image: image_url },
    };

    let url = format!(
        "{}/v1/predictions",
        state.config.removal_api_base.trim_end_matches('/')
    );
    let resp = state
        .upstream
        .post_json(&url, token, &[("prefer", "wait")], &body)
        .await?;

    if !resp.status().is_success() {
        return Err(
            status::reject(resp, "BACKGROUND_REMOVAL_FAILED", "background removal failed").await,
        );
    }

    let prediction: PredictionResponse = resp
        .json()
        .await
        .map_err(|e| AppError::System(anyhow::anyhow!("provider response was not valid JSON: {}", e)))?;

    // Content-level validation: an HTTP 200 without an output image is
    // still a failure.
    let output = prediction.into_output()?;

    tracing::info!("background removal completed");

    Ok(Json(RemoveBackgroundResponse { image_url: output }))
}
