//! Servicio de drivers
//!
//! Frontera entre la capa HTTP y la persistencia. Hoy solo delega: los
//! resultados y errores del repositorio pasan sin transformar. Es el punto
//! donde irían reglas de negocio, autorización o métricas.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::models::{AddDriverResponse, Driver, FullDriver, NewDriver};
use crate::repositories::DriverRepository;
use crate::utils::errors::StorageError;

/// Capacidades que los handlers necesitan del servicio
#[async_trait]
pub trait DriverService: Send + Sync {
    async fn add_driver(&self, driver: NewDriver) -> Result<AddDriverResponse, StorageError>;
    async fn get_driver_by_id(&self, id: i64) -> Result<Driver, StorageError>;
    async fn get_full_driver_by_id(&self, id: i64) -> Result<FullDriver, StorageError>;
    async fn get_driver_list(&self) -> Result<Vec<Driver>, StorageError>;
    async fn count_drivers(&self) -> Result<i64, StorageError>;
    async fn health_check(&self) -> Result<(), StorageError>;
}

pub struct DriverServiceImpl {
    repository: Arc<dyn DriverRepository>,
}

impl DriverServiceImpl {
    pub fn new(repository: Arc<dyn DriverRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DriverService for DriverServiceImpl {
    async fn add_driver(&self, driver: NewDriver) -> Result<AddDriverResponse, StorageError> {
        debug!("➕ add_driver vehicle_id={}", driver.vehicle_id);
        self.repository.add_driver(&driver).await
    }

    async fn get_driver_by_id(&self, id: i64) -> Result<Driver, StorageError> {
        debug!("🔍 get_driver_by_id id={}", id);
        self.repository.get_driver_by_id(id).await
    }

    async fn get_full_driver_by_id(&self, id: i64) -> Result<FullDriver, StorageError> {
        debug!("🔍 get_full_driver_by_id id={}", id);
        self.repository.get_full_driver_by_id(id).await
    }

    async fn get_driver_list(&self) -> Result<Vec<Driver>, StorageError> {
        debug!("📋 get_driver_list");
        self.repository.get_driver_list().await
    }

    async fn count_drivers(&self) -> Result<i64, StorageError> {
        self.repository.count_drivers().await
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        self.repository.ping().await
    }
}
