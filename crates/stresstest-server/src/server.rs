//! Server configuration and startup.

use std::any::Any;

use axum::{
    http::{HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;

/// Create the API router allowing any origin.
pub fn create_router(state: AppState) -> Router {
    create_router_with_cors(state, &[])
}

/// Create the API router restricted to `origins` (any origin when empty).
pub fn create_router_with_cors(state: AppState, origins: &[String]) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(not_found)
        // Middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/validate-ticker", post(routes::tickers::validate))
        .route("/search-stocks", get(routes::tickers::search))
        .route("/stress-test", post(routes::stress::run))
        .route("/scenarios", get(routes::scenarios::list))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(cors::Any);

    if origins.is_empty() {
        return layer.allow_origin(cors::Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(allowed)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(format!("Internal server error: {detail}")).into_response()
}

/// Run the server.
pub async fn run_server(state: AppState, config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_router_with_cors(state, &config.cors_origins);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Stress test server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /api/health");
    tracing::info!("  POST /api/validate-ticker");
    tracing::info!("  GET  /api/search-stocks?q=");
    tracing::info!("  POST /api/stress-test");
    tracing::info!("  GET  /api/scenarios");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down...");
}
