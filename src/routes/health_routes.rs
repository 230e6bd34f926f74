//! Rutas de salud
//!
//! `/ping` responde sin tocar la base de datos; `/health` comprueba el pool.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::error;

use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health))
}

async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match state.driver_service.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "database": "up", "timestamp": timestamp })),
        ),
        Err(e) => {
            error!("❌ Health check falló: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "down", "timestamp": timestamp })),
            )
        }
    }
}
