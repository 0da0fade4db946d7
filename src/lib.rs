pub mod api_client;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state для всего приложения
#[derive(Debug, Clone)]
pub struct AppState {
    pub api: api_client::ApiClient,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let api = api_client::ApiClient::from_config(&config.api);
        Arc::new(Self { api, config })
    }
}

/// Full router: health endpoints plus the controllers.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Bus Seat Booking UI" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
