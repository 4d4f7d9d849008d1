use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::api::require_field;
use crate::errors::AppError;
use crate::models::cost::COST_UNIT;
use crate::models::video::{
    EchoedParameters, GenerateVideoRequest, ProviderTaskResponse, ProviderTaskStatus,
    ProviderVideoRequest, SystemBlock, UsageBlock, VideoGenerationResponse, VideoStatusResponse,
};
use crate::proxy::status;
use crate::AppState;

const MODE_IMAGE_TO_VIDEO: &str = "image_to_video";

/// Guidance weight sent with every generation; the editor does not expose it.
const CFG_SCALE: f64 = 0.5;

/// Seconds of processing estimated per second of clip when the provider
/// does not supply its own estimate.
const ESTIMATE_FACTOR: u64 = 10;

/// POST /api/v1/generate-video
///
/// Validates the editor's request, signs on with the provider token, and
/// forwards a single generation request. The provider's acknowledgment is
/// normalized into the task descriptor the UI polls on.
pub async fn generate_video(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateVideoRequest>,
) -> Result<Json<VideoGenerationResponse>, AppError> {
    let start = Instant::now();

    let image_url = require_field(payload.image_url.as_deref(), "imageUrl")?.to_string();
    let prompt = require_field(payload.prompt.as_deref(), "prompt")?.to_string();

    let manager = state.video_token_manager()?;
    let token = manager.get_valid_token(&state.token_store)?;

    let seed = state.seed.next_seed();
    let body = ProviderVideoRequest {
        model: payload.model.clone(),
        mode: MODE_IMAGE_TO_VIDEO,
        image_url,
        prompt,
        duration: payload.duration,
        aspect_ratio: payload.aspect_ratio.clone(),
        motion: payload.motion.clone(),
        creativity: payload.creativity_level,
        cfg_scale: CFG_SCALE,
        seed,
    };

    let url = format!(
        "{}/v1/videos/image2video",
        state.config.video_api_base.trim_end_matches('/')
    );
    let resp = state.upstream.post_json(&url, &token, &[], &body).await?;

    if !resp.status().is_success() {
        return Err(status::reject(resp, "GENERATION_FAILED", "video generation failed").await);
    }

    let ack: ProviderTaskResponse = resp
        .json()
        .await
        .map_err(|e| AppError::System(anyhow::anyhow!("provider response was not valid JSON: {}", e)))?;

    let task_id = ack
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Processing("provider acknowledgment contained no task id".into()))?;

    let task_status = ack.status.unwrap_or_else(|| "processing".to_string());
    let estimated_time = ack
        .estimated_time
        .unwrap_or(u64::from(payload.duration) * ESTIMATE_FACTOR);

    tracing::info!(
        task_id = %task_id,
        model = %payload.model,
        duration = payload.duration,
        "video generation accepted"
    );

    Ok(Json(VideoGenerationResponse {
        success: true,
        task_id,
        status: task_status,
        estimated_time,
        model: payload.model,
        parameters: EchoedParameters {
            duration: payload.duration,
            aspect_ratio: payload.aspect_ratio,
            motion: payload.motion,
            creativity_level: payload.creativity_level,
            seed,
        },
        usage: UsageBlock {
            request_duration: start.elapsed().as_millis() as u64,
            estimated_cost: state.costs.estimate(payload.duration),
            cost_unit: COST_UNIT,
            timestamp: Utc::now().to_rfc3339(),
        },
        system: SystemBlock {
            provider: "kling",
            gateway: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            request_id: Uuid::new_v4().to_string(),
        },
    }))
}

/// GET /api/v1/video-status/:task_id
///
/// Poll proxy for the task descriptor returned by `generate_video`.
pub async fn video_status(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<String>,
) -> Result<Json<VideoStatusResponse>, AppError> {
    if task_id.trim().is_empty() {
        return Err(AppError::InvalidRequest { field: "taskId" });
    }

    let manager = state.video_token_manager()?;
    let token = manager.get_valid_token(&state.token_store)?;

    let url = format!(
        "{}/v1/videos/image2video/{}",
        state.config.video_api_base.trim_end_matches('/'),
        task_id
    );
    let resp = state.upstream.get(&url, &token).await?;

    if !resp.status().is_success() {
        return Err(status::reject(resp, "STATUS_CHECK_FAILED", "video status check failed").await);
    }

    let progress: ProviderTaskStatus = resp
        .json()
        .await
        .map_err(|e| AppError::System(anyhow::anyhow!("provider response was not valid JSON: {}", e)))?;

    Ok(Json(VideoStatusResponse {
        success: true,
        task_id: progress.id.unwrap_or(task_id),
        status: progress.status.unwrap_or_else(|| "processing".to_string()),
        video_url: progress.video_url,
    }))
}
