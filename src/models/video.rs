use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Defaults applied when the editor omits optional generation knobs.
fn default_duration() -> u32 {
    5
}
fn default_aspect_ratio() -> String {
    "16:9".to_string()
}
fn default_motion() -> String {
    "medium".to_string()
}
fn default_creativity() -> f64 {
    0.5
}
fn default_model() -> String {
    "kling-v1".to_string()
}

/// Browser-facing request to animate a still image.
///
/// `image_url` and `prompt` are required but modeled as options so the
/// handler can reject their absence with the gateway's own envelope
/// instead of a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoRequest {
    pub image_url: Option<String>,
    pub prompt: Option<String>,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    #[serde(default = "default_motion")]
    pub motion: String,
    #[serde(default = "default_creativity")]
    pub creativity_level: f64,
    #[serde(default = "default_model")]
    pub model: String,
}

/// Body forwarded to the provider's image-to-video endpoint.
#[derive(Debug, Serialize)]
pub struct ProviderVideoRequest {
    pub model: String,
    pub mode: &'static str,
    pub image_url: String,
    pub prompt: String,
    pub duration: u32,
    pub aspect_ratio: String,
    pub motion: String,
    pub creativity: f64,
    pub cfg_scale: f64,
    pub seed: u32,
}

/// Provider acknowledgment that generation has started.
/// Field names vary between provider API revisions, hence the aliases.
#[derive(Debug, Deserialize)]
pub struct ProviderTaskResponse {
    #[serde(alias = "task_id")]
    pub id: Option<String>,
    #[serde(alias = "task_status")]
    pub status: Option<String>,
    #[serde(alias = "estimatedTime")]
    pub estimated_time: Option<u64>,
}

/// Provider task-status payload returned by the poll endpoint.
#[derive(Debug, Deserialize)]
pub struct ProviderTaskStatus {
    #[serde(alias = "task_id")]
    pub id: Option<String>,
    #[serde(alias = "task_status")]
    pub status: Option<String>,
    #[serde(alias = "videoUrl")]
    pub video_url: Option<String>,
}

// ── Normalized responses ─────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGenerationResponse {
    pub success: bool,
    pub task_id: String,
    pub status: String,
    /// Seconds until the clip is expected to be ready.
    pub estimated_time: u64,
    pub model: String,
    pub parameters: EchoedParameters,
    pub usage: UsageBlock,
    pub system: SystemBlock,
}

/// The generation parameters echoed back to the caller, seed included so
/// the UI can reproduce a run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoedParameters {
    pub duration: u32,
    pub aspect_ratio: String,
    pub motion: String,
    pub creativity_level: f64,
    pub seed: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageBlock {
    /// Milliseconds this gateway spent handling the request.
    pub request_duration: u64,
    pub estimated_cost: Decimal,
    pub cost_unit: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemBlock {
    pub provider: &'static str,
    pub gateway: &'static str,
    pub version: &'static str,
    pub request_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatusResponse {
    pub success: bool,
    pub task_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}
