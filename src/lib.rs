//! MediaGW — server-side proxy for generative image/video providers.
//!
//! The library crate carries the application state and router so the
//! integration tests in `tests/` can drive the full request pipeline.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod models;
pub mod proxy;

use std::sync::Arc;

use auth::{TokenManager, TokenStore};
use config::Config;
use errors::AppError;
use models::cost::CostTable;
use models::seed::{SeedSource, ThreadRngSeed};
use proxy::upstream::UpstreamClient;

/// Shared application state passed to handlers.
///
/// The token store is the only mutable member; everything else is fixed
/// at startup.
pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
    /// Present only when both video-provider secrets are configured.
    pub video_auth: Option<TokenManager>,
    pub token_store: TokenStore,
    pub seed: Box<dyn SeedSource>,
    pub costs: CostTable,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let video_auth = match (&config.video_access_key, &config.video_secret_key) {
            (Some(access_key), Some(secret_key)) => {
                Some(TokenManager::new(access_key.clone(), secret_key.clone()))
            }
            _ => None,
        };

        Self {
            config,
            upstream: UpstreamClient::new(),
            video_auth,
            token_store: TokenStore::default(),
            seed: Box::new(ThreadRngSeed),
            costs: CostTable::default(),
        }
    }

    /// The video token manager, or a ConfigurationError when either
    /// secret is missing. Checked before any token acquisition.
    pub fn video_token_manager(&self) -> Result<&TokenManager, AppError> {
        self.video_auth.as_ref().ok_or(AppError::Configuration(
            "video provider credentials are not configured",
        ))
    }
}

/// Assemble the service router around shared state.
pub fn app(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/healthz", axum::routing::get(|| async { "ok" }))
        .route("/readyz", axum::routing::get(|| async { "ok" }))
        .nest("/api/v1", api::api_router())
        .with_state(state)
}
