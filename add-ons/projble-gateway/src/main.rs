//! Axum-based chat gateway for the PROJ-BLE chatbot. Config-driven via CoreConfig.

mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use projble_core::{CoreConfig, QuestionRouter};
use projble_skills::GenerationClient;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pre-flight: load and validate config without binding a port.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;
    config.validate()?;
    println!("service:   {}", config.service_name);
    println!("listen:    {}:{}", config.host, config.port);
    println!("llm mode:  {:?}", config.llm_mode);
    println!("llm:       {} ({})", config.llm.base_url, config.llm.model);
    println!("frontend:  {}", config.frontend_dir);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[projble-gateway] .env not loaded: {} (using system environment)", e);
    }

    if std::env::args().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load()?);
    let generator = Arc::new(GenerationClient::from_config(&config)?);
    tracing::info!(
        mode = ?generator.mode(),
        base_url = %config.llm.base_url,
        model = %config.llm.model,
        "Generation client ready"
    );
    let router = Arc::new(QuestionRouter::new(generator));

    let app = build_app(AppState {
        config: Arc::clone(&config),
        router,
    });

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("projble-gateway listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_app(state: AppState) -> Router {
    let frontend_dir = PathBuf::from(&state.config.frontend_dir);

    Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/health", get(handlers::health))
        .route_service(
            "/",
            ServeFile::new(frontend_dir.join("templates").join("index.html")),
        )
        .route_service("/test", ServeFile::new(frontend_dir.join("test.html")))
        .nest_service("/static", ServeDir::new(frontend_dir.join("static")))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handlers::chat::handle_panic))
        .layer(TraceLayer::new_for_http())
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) router: Arc<QuestionRouter>,
}
