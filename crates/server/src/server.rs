//! Server initialization and routing
//!
//! Router assembly, middleware stack, and graceful shutdown handling.

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{api_info, index, not_found, questions};
use crate::state::ServerState;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware.
///
/// Public so integration tests can drive the router in-process with
/// `tower::ServiceExt::oneshot` instead of binding a socket.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let question_routes = Router::new()
        .route("/replica-check", post(questions::replica_check))
        .route("/sample-questions", get(questions::sample_questions))
        .route("/health", get(questions::health));

    let index_routes = Router::new()
        .route("/initialize", post(index::initialize_index))
        .route("/add", post(index::add_to_index))
        .route("/search", post(index::search_index))
        .route("/stats", get(index::index_stats));

    Router::new()
        .route("/", get(api_info))
        .nest("/api/questions", question_routes)
        .nest("/api/index", index_routes)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .layer(TimeoutLayer::new(state.config.timeout()))
        .layer(cors)
        .layer(from_fn(request_id))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the replicheck HTTP server.
///
/// Initializes structured JSON logging, builds the shared state and router,
/// binds the configured TCP address, and serves until SIGTERM or Ctrl+C.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .json()
        .init();

    let state = Arc::new(ServerState::new(config.clone())?);
    let app = build_router(state);

    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "Starting replicheck server on {} (embedding mode: {})",
        addr,
        config.embedding.mode
    );
    tracing::info!(
        "Timeout: {}s, Max body: {}MB, Strategy: {}",
        config.timeout_secs,
        config.max_body_size_mb,
        config.scoring_strategy
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
