use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;

use crate::errors::AppError;
use crate::AppState;

pub mod image;
pub mod video;

/// Build the proxy API router. The caller mounts this under `/api/v1`.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-video", post(video::generate_video))
        .route("/video-status/:task_id", get(video::video_status))
        .route("/remove-background", post(image::remove_background))
        .fallback(fallback_404)
}

async fn fallback_404() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Required-field gate shared by the handlers. Rejection happens here,
/// before any token work or outbound call.
pub(crate) fn require_field<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::InvalidRequest { field }),
    }
}
