use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use media_gateway::{app, config, AppState};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "media_gateway=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load()?;
    let args = cli::Cli::parse();

    match args.command {
        Some(cli::Commands::Serve { port }) => {
            let port = port.unwrap_or(cfg.port);
            run_server(cfg, port).await
        }
        Some(cli::Commands::Token) => print_signed_token(cfg),
        None => {
            let port = cfg.port;
            run_server(cfg, port).await
        }
    }
}

async fn run_server(cfg: config::Config, port: u16) -> anyhow::Result<()> {
    let dashboard_origin = cfg.dashboard_origin.clone();
    let state = Arc::new(AppState::from_config(cfg));

    let router = app(state)
        // Data-URL image payloads from the editor can be large.
        .layer(DefaultBodyLimit::max(15 * 1024 * 1024))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors_layer(dashboard_origin))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(axum::middleware::from_fn(security_headers_middleware));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("mediagw listening on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}

/// CORS: the configured dashboard origin, plus localhost for development.
fn cors_layer(dashboard_origin: String) -> CorsLayer {
    use axum::http::{HeaderName, Method};
    use tower_http::cors::AllowOrigin;

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            let origin_str = origin.to_str().unwrap_or("");
            origin_str == dashboard_origin
                || origin_str.starts_with("http://localhost:")
                || origin_str.starts_with("http://127.0.0.1:")
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([HeaderName::from_static("content-type")])
}

/// Middleware: injects a unique X-Request-Id into every response so
/// clients can correlate errors with gateway logs.
async fn request_id_middleware(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let req_id = uuid::Uuid::new_v4().to_string();
    let mut resp = next.run(req).await;
    if let Ok(val) = axum::http::HeaderValue::from_str(&req_id) {
        resp.headers_mut().insert("x-request-id", val);
    }
    resp
}

/// Middleware: response hardening headers. The gateway fronts a browser
/// UI, so the usual sniffing/framing/caching protections apply.
async fn security_headers_middleware(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let mut resp = next.run(req).await;
    let headers = resp.headers_mut();

    headers.insert("X-Content-Type-Options", "nosniff".parse().unwrap());
    headers.insert("X-Frame-Options", "DENY".parse().unwrap());
    headers.insert("Cache-Control", "no-store".parse().unwrap());
    headers.insert("Referrer-Policy", "no-referrer".parse().unwrap());
    headers.remove("Server");

    resp
}

fn print_signed_token(cfg: config::Config) -> anyhow::Result<()> {
    let state = AppState::from_config(cfg);
    let manager = state
        .video_token_manager()
        .map_err(|_| anyhow::anyhow!("KLING_ACCESS_KEY / KLING_SECRET_KEY are not set"))?;
    let token = manager.get_valid_token(&state.token_store)?;

    let expires_at = state
        .token_store
        .get()
        .map(|t| t.expires_at.to_rfc3339())
        .unwrap_or_default();
    println!("{}", token);
    eprintln!("expires: {}", expires_at);
    Ok(())
}
