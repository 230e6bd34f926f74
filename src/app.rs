//! Construcción del router de la API

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::EnvironmentConfig;
use crate::middleware::{cors_layer, request_timeout_layer};
use crate::routes::{driver_routes::create_driver_router, health_routes::create_health_router};
use crate::state::AppState;

pub fn build_router(state: AppState, config: &EnvironmentConfig) -> Router {
    Router::new()
        .merge(create_driver_router())
        .merge(create_health_router())
        .layer(request_timeout_layer(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .with_state(state)
}
