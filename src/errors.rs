use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::proxy::status::collapse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required field {field}")]
    InvalidRequest { field: &'static str },

    #[error("configuration error: {0}")]
    Configuration(&'static str),

    #[error("credential error: {0}")]
    Credential(String),

    #[error("upstream rejected with status {upstream_status}: {message}")]
    UpstreamRejected {
        upstream_status: u16,
        code: &'static str,
        message: &'static str,
        detail: Option<String>,
    },

    #[error("processing error: {0}")]
    Processing(String),

    #[error("system error: {0}")]
    System(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, msg, detail) = match self {
            AppError::InvalidRequest { field } => (
                StatusCode::BAD_REQUEST,
                "INVALID_REQUEST",
                format!("{} is required", field),
                None,
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                msg.to_string(),
                None,
            ),
            AppError::Credential(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CREDENTIAL_ERROR",
                "failed to sign provider token".to_string(),
                Some(detail),
            ),
            AppError::UpstreamRejected {
                upstream_status,
                code,
                message,
                detail,
            } => (collapse(upstream_status), code, message.to_string(), detail),
            AppError::Processing(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROCESSING_ERROR",
                msg,
                None,
            ),
            AppError::System(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SYSTEM_ERROR",
                "internal error".to_string(),
                Some(format!("{:#}", e)),
            ),
        };

        if status.is_server_error() {
            tracing::error!("request failed [{}]: {}", code, msg);
        } else {
            tracing::warn!("request rejected [{}]: {}", code, msg);
        }

        let body = Json(json!({
            "error": msg,
            "errorCode": code,
            "details": detail,
            "status": status.as_u16(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}
