/// Runtime configuration, read once at startup.
///
/// Provider credentials are optional at load time: a missing secret turns
/// the corresponding route into a 500 with a CONFIGURATION_ERROR envelope
/// rather than preventing the service from starting.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Access-key id for the video provider's signed-token scheme.
    pub video_access_key: Option<String>,
    /// Signing secret paired with the access key.
    pub video_secret_key: Option<String>,
    pub video_api_base: String,
    /// Static credential for the background-removal provider.
    pub removal_api_token: Option<String>,
    pub removal_api_base: String,
    /// Model version id sent with every removal prediction.
    pub removal_model_version: String,
    /// Browser origin allowed by CORS, i.e. where the editor UI is served.
    pub dashboard_origin: String,
}

const DEFAULT_REMOVAL_MODEL_VERSION: &str =
    "95fcc2a26d3899cd6c2691c900465aaeff466285a65c14638cc5f36f34befaf1";

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    let video_access_key = non_empty_var("KLING_ACCESS_KEY");
    let video_secret_key = non_empty_var("KLING_SECRET_KEY");
    if video_access_key.is_none() || video_secret_key.is_none() {
        tracing::warn!(
            "KLING_ACCESS_KEY / KLING_SECRET_KEY not set — video routes will answer 500 until both are configured"
        );
    }

    let removal_api_token = non_empty_var("REPLICATE_API_TOKEN");
    if removal_api_token.is_none() {
        tracing::warn!(
            "REPLICATE_API_TOKEN not set — background removal will answer 500 until it is configured"
        );
    }

    Ok(Config {
        port: std::env::var("MEDIAGW_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8790),
        video_access_key,
        video_secret_key,
        video_api_base: std::env::var("KLING_API_BASE")
            .unwrap_or_else(|_| "https://api.klingai.com".into()),
        removal_api_token,
        removal_api_base: std::env::var("REPLICATE_API_BASE")
            .unwrap_or_else(|_| "https://api.replicate.com".into()),
        removal_model_version: std::env::var("REMOVAL_MODEL_VERSION")
            .unwrap_or_else(|_| DEFAULT_REMOVAL_MODEL_VERSION.into()),
        dashboard_origin: std::env::var("DASHBOARD_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".into()),
    })
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
