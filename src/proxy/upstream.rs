/// HTTP client for the outbound provider calls.
/// One client, shared by every handler through the application state.
use std::time::Duration;

use serde::Serialize;

use crate::errors::AppError;

pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .pool_max_idle_per_host(32)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// POST a JSON body with a bearer credential. Single attempt: this
    /// layer reports the first outcome upward and never retries.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        bearer: &str,
        extra_headers: &[(&'static str, &'static str)],
        body: &B,
    ) -> Result<reqwest::Response, AppError> {
        let mut req = self.client.post(url).bearer_auth(bearer).json(body);
        for (name, value) in extra_headers {
            req = req.header(*name, *value);
        }

        req.send().await.map_err(|e| {
            tracing::warn!("upstream request failed: {}", e);
            AppError::System(anyhow::anyhow!("upstream request failed: {}", e))
        })
    }

    /// GET with a bearer credential. Same single-attempt contract.
    pub async fn get(&self, url: &str, bearer: &str) -> Result<reqwest::Response, AppError> {
        self.client
            .get(url)
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("upstream request failed: {}", e);
                AppError::System(anyhow::anyhow!("upstream request failed: {}", e))
            })
    }
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new()
    }
}
