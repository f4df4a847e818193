pub mod cors;
pub mod request_id;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;

pub use cors::{allow_origin, cors_layer};
pub use request_id::request_id_middleware;

/// JSON bodies above this size are rejected
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the Engine router with all routes and layers
pub fn build_router(config: &Config, tts_controller: Arc<TtsController>) -> Router {
    let tts_routes = Router::new()
        .route("/openai/tts", post(TtsController::synthesize))
        .route("/openai/tts-chunked", post(TtsController::synthesize_chunked))
        .with_state(tts_controller)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    Router::new()
        .route("/health", get(health::health))
        .merge(tts_routes)
        .layer(cors_layer(config.allowed_origins.clone()))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Engine listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
