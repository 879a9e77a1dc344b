//! Server bootstrap: configuration loading, router assembly and runtime.

use anyhow::{Context, Result};
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::{routing::get, Extension, Router};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::api;
use crate::catalog::Catalog;
use crate::hub::{Broadcaster, ChatHub, MessageBus};
use crate::websocket;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Chat relay configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Simulated assistant latency before the canned reply is broadcast
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Broadcast buffer size per session before slow sessions start lagging
    #[serde(default = "default_bus_capacity")]
    pub bus_capacity: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            bus_capacity: default_bus_capacity(),
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    500
}

fn default_bus_capacity() -> usize {
    256
}

/// Embedded default configuration (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Load configuration from files and environment
pub fn load_config() -> Result<AppConfig> {
    let config = Config::builder()
        // 1. Embedded defaults (always available)
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        // 2. External overrides (optional)
        .add_source(File::with_name("config/local").required(false))
        // 3. Environment variables (highest priority), e.g. ELITESHOP_SERVER__PORT
        .add_source(
            Environment::with_prefix("ELITESHOP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: AppConfig = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Bare PORT beats everything else, matching the hosting convention the
    // demo is deployed under.
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port
            .parse()
            .with_context(|| format!("Invalid PORT value: {port}"))?;
    }

    Ok(config)
}

/// Catch-all for handler panics: log the fault, answer with a generic 500,
/// keep the process running.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("handler panicked: {}", detail);
    (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!").into_response()
}

/// CORS open to any origin for GET/POST with credentials enabled. Unsafe for
/// production; kept for functional parity with the demo deployment.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true)
}

/// Build the application router with all endpoints and shared state.
pub fn build_router(config: &AppConfig) -> Router {
    let catalog = Arc::new(Catalog::new());
    let bus = Arc::new(MessageBus::new(config.chat.bus_capacity));
    let hub = Arc::new(ChatHub::new(
        bus.clone() as Arc<dyn Broadcaster>,
        catalog.clone(),
        Duration::from_millis(config.chat.reply_delay_ms),
    ));

    let app = Router::new()
        .merge(api::health_routes())
        .merge(api::products_routes())
        .merge(websocket::websocket_router())
        // Layers (applied to all routes)
        .layer(Extension(catalog))
        .layer(Extension(hub))
        .layer(Extension(bus))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    // Landing page: static assets when present, fixed text otherwise
    let web_dir = std::path::Path::new("web");
    if web_dir.exists() {
        info!("serving landing page from {}", web_dir.display());
        app.fallback_service(ServeDir::new(web_dir).append_index_html_on_directories(true))
    } else {
        app.route("/", get(|| async { "EliteShop Chat Server is running" }))
    }
}

/// Run the server until shutdown.
pub async fn run(config: AppConfig) -> Result<()> {
    let app = build_router(&config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    info!("HTTP server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("EliteShop chat server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
