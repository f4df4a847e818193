use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tts_engine::controllers::tts::TtsController;
use tts_engine::domain::tts::TtsService;
use tts_engine::infrastructure::config::{Config, LogFormat};
use tts_engine::infrastructure::http::start_http_server;
use tts_engine::infrastructure::repositories::OpenAiTtsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting TTS Engine on {}:{}", config.host, config.port);

    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set. Synthesis requests will fail until it is configured.");
    }

    match &config.allowed_origins {
        Some(origins) => tracing::info!(?origins, "CORS restricted to explicit origins"),
        None => tracing::info!("CORS restricted to loopback origins"),
    }

    let http_client = reqwest::Client::builder()
        .timeout(config.openai_timeout())
        .build()?;

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let tts_repo = Arc::new(OpenAiTtsRepository::new(
        http_client,
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    ));
    let tts_service = Arc::new(TtsService::new(tts_repo));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tts_engine=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
