//! Rutas de drivers
//!
//! Decodifica y valida los requests, delega en `DriverService` y traduce
//! resultados y errores a códigos HTTP y cuerpos JSON.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::models::{AddDriverRequest, AddDriverResponse, Driver, FullDriver};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppResult};

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/addDriver", post(add_driver))
        .route("/driver/:id", get(get_driver))
        .route("/driver/:id/full", get(get_full_driver))
        .route("/drivers", get(list_drivers))
}

/// Extrae y valida el identificador del path
fn driver_id(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    let Path(id) = path?;
    if id < 1 {
        return Err(bad_request_error("id must be a positive integer"));
    }
    Ok(id)
}

async fn add_driver(
    State(state): State<AppState>,
    payload: Result<Json<AddDriverRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<AddDriverResponse>)> {
    let Json(request) = payload?;
    let new_driver = request.into_new_driver()?;

    let response = state.driver_service.add_driver(new_driver).await?;

    info!("✅ Driver creado con id {}", response.id);
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_driver(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Driver>> {
    let id = driver_id(path)?;
    let driver = state.driver_service.get_driver_by_id(id).await?;
    Ok(Json(driver))
}

async fn get_full_driver(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<FullDriver>> {
    let id = driver_id(path)?;
    let driver = state.driver_service.get_full_driver_by_id(id).await?;
    Ok(Json(driver))
}

async fn list_drivers(State(state): State<AppState>) -> AppResult<Json<Vec<Driver>>> {
    let drivers = state.driver_service.get_driver_list().await?;
    Ok(Json(drivers))
}
