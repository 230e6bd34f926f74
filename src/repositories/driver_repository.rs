//! Repositorio de drivers
//!
//! Traduce las operaciones del dominio a queries parametrizadas contra
//! PostgreSQL. No aplica reglas de negocio ni reformatea los datos del
//! cliente: solo bindea parámetros y mapea filas.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::models::{AddDriverResponse, Driver, FullDriver, FullDriverRow, NewDriver};
use crate::utils::errors::StorageError;

/// Operaciones de persistencia que necesita la capa de servicio
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Inserta un driver y devuelve el `id` generado por la base de datos.
    /// Un `vehicle_id` inexistente produce `StorageError::InvalidReference`.
    async fn add_driver(&self, driver: &NewDriver) -> Result<AddDriverResponse, StorageError>;

    async fn get_driver_by_id(&self, id: i64) -> Result<Driver, StorageError>;

    /// Lookup con `INNER JOIN vehicles`; sin fila de vehículo el resultado es `NotFound`.
    async fn get_full_driver_by_id(&self, id: i64) -> Result<FullDriver, StorageError>;

    /// Scan completo sin orden garantizado
    async fn get_driver_list(&self) -> Result<Vec<Driver>, StorageError>;

    async fn count_drivers(&self) -> Result<i64, StorageError>;

    async fn ping(&self) -> Result<(), StorageError>;
}

pub struct PgDriverRepository {
    pool: PgPool,
}

impl PgDriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PgDriverRepository {
    async fn add_driver(&self, driver: &NewDriver) -> Result<AddDriverResponse, StorageError> {
        let response = sqlx::query_as::<_, AddDriverResponse>(
            "INSERT INTO drivers (name, vehicle_id, score) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&driver.name)
        .bind(driver.vehicle_id)
        .bind(driver.score)
        .fetch_one(&self.pool)
        .await?;

        debug!("💾 Driver insertado con id {}", response.id);
        Ok(response)
    }

    async fn get_driver_by_id(&self, id: i64) -> Result<Driver, StorageError> {
        let driver = sqlx::query_as::<_, Driver>(
            "SELECT id, name, vehicle_id, score FROM drivers WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    async fn get_full_driver_by_id(&self, id: i64) -> Result<FullDriver, StorageError> {
        let row = sqlx::query_as::<_, FullDriverRow>(
            r#"
            SELECT
                d.id,
                d.name,
                d.score,
                v.id AS vehicle_id,
                v.type AS vehicle_type,
                v.vendor AS vehicle_vendor,
                v.model AS vehicle_model
            FROM drivers d
            INNER JOIN vehicles v
                ON d.vehicle_id = v.id
            WHERE d.id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(FullDriver::from(row))
    }

    async fn get_driver_list(&self) -> Result<Vec<Driver>, StorageError> {
        let drivers = sqlx::query_as::<_, Driver>("SELECT id, name, vehicle_id, score FROM drivers")
            .fetch_all(&self.pool)
            .await?;

        debug!("📋 {} drivers leídos", drivers.len());
        Ok(drivers)
    }

    async fn count_drivers(&self) -> Result<i64, StorageError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM drivers")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
