//! Marquee Backend
//!
//! REST backend for a movie-theater promotional event catalog, backed by a
//! flat JSON file and serving the static presentation views.

mod api;
mod config;
mod errors;
mod models;
mod query;
mod store;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::EventStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EventStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Marquee Backend");
    tracing::info!("Data path: {:?}", config.data_path);
    tracing::info!("Static dir: {:?}", config.static_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize the event store
    let store = Arc::new(EventStore::new(&config.data_path));

    match store.load().await? {
        Some(events) => tracing::info!("Event data file holds {} events", events.len()),
        None => tracing::warn!(
            "No event data file at {:?} yet; the listing starts empty",
            config.data_path
        ),
    }

    // Create application state
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Events
        .route("/events", get(api::list_events))
        .route("/events", post(api::create_event))
        .route("/events/vocab", get(api::get_vocab))
        .route("/events/{id}", get(api::get_event))
        .route("/events/{id}", put(api::update_event))
        .route("/events/{id}", delete(api::delete_event));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    // Static presentation views; unknown paths fall through to the asset dir
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
