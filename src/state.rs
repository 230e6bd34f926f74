//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay estado mutable entre requests.

use std::sync::Arc;

use sqlx::PgPool;

use crate::repositories::PgDriverRepository;
use crate::services::{DriverService, DriverServiceImpl};

#[derive(Clone)]
pub struct AppState {
    pub driver_service: Arc<dyn DriverService>,
}

impl AppState {
    pub fn new(driver_service: Arc<dyn DriverService>) -> Self {
        Self { driver_service }
    }

    /// Cablea repositorio → servicio sobre el pool de PostgreSQL
    pub fn from_pool(pool: PgPool) -> Self {
        let repository = Arc::new(PgDriverRepository::new(pool));
        Self::new(Arc::new(DriverServiceImpl::new(repository)))
    }
}
