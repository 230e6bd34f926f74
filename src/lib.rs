//! Driver registry
//!
//! API HTTP para alta y consulta de conductores y sus vehículos sobre
//! PostgreSQL. Capas: rutas → servicio → repositorio, cada una detrás de
//! un trait.

pub mod app;
pub mod config;
pub mod database;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use app::build_router;
pub use state::AppState;
