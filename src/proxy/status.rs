use axum::http::StatusCode;

use crate::errors::AppError;

/// One row of the upstream-status translation table.
#[derive(Debug)]
pub struct StatusMapping {
    pub upstream: u16,
    pub code: &'static str,
    pub message: &'static str,
}

/// Ordered translation table, consulted by every proxy handler.
/// Statuses without a row fall through to the handler's own fallback code.
pub const UPSTREAM_STATUS_MAP: &[StatusMapping] = &[
    StatusMapping {
        upstream: 400,
        code: "INVALID_PARAMETERS",
        message: "the provider rejected the request parameters",
    },
    StatusMapping {
        upstream: 401,
        code: "AUTHENTICATION_FAILED",
        message: "the provider rejected the credentials",
    },
    StatusMapping {
        upstream: 403,
        code: "TOKEN_INVALID",
        message: "the provider rejected the signed token",
    },
    StatusMapping {
        upstream: 429,
        code: "RATE_LIMIT_EXCEEDED",
        message: "the provider throttled the request",
    },
    StatusMapping {
        upstream: 500,
        code: "SERVICE_ERROR",
        message: "the provider reported an internal failure",
    },
];

pub fn lookup(upstream: u16) -> Option<&'static StatusMapping> {
    UPSTREAM_STATUS_MAP.iter().find(|m| m.upstream == upstream)
}

/// Outward status policy: client-attributable upstream rejections surface
/// as 400, everything else (including every 5xx) as 500.
pub fn collapse(upstream: u16) -> StatusCode {
    match upstream {
        400 | 401 | 403 | 429 => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Consume a non-success provider response and translate it through the
/// table. The response body, when it parses as a provider error message,
/// is preserved as the envelope's `details`.
pub async fn reject(
    resp: reqwest::Response,
    fallback_code: &'static str,
    fallback_message: &'static str,
) -> AppError {
    let upstream_status = resp.status().as_u16();
    let detail = provider_detail(&resp.text().await.unwrap_or_default());

    let (code, message) = match lookup(upstream_status) {
        Some(m) => (m.code, m.message),
        None => (fallback_code, fallback_message),
    };

    AppError::UpstreamRejected {
        upstream_status,
        code,
        message,
        detail,
    }
}

/// Best-effort extraction of a human-readable message from a provider
/// error body. Falls back to the raw text, truncated.
fn provider_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["message", "error", "detail"] {
            if let Some(s) = v.get(key).and_then(|m| m.as_str()) {
                return Some(s.to_string());
            }
        }
    }

    Some(trimmed.chars().take(200).collect())
}
