//! Repositorio en memoria para tests
//!
//! Reproduce el contrato de `PgDriverRepository` (ids generados, foreign key
//! sobre `vehicles`, inner join) sin base de datos.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::DriverRepository;
use crate::models::{AddDriverResponse, Driver, FullDriver, NewDriver, Vehicle};
use crate::utils::errors::StorageError;

#[derive(Default)]
struct Tables {
    vehicles: HashMap<i64, Vehicle>,
    drivers: Vec<Driver>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryDriverRepository {
    tables: Mutex<Tables>,
    offline: Mutex<bool>,
    calls: AtomicUsize,
}

impl InMemoryDriverRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicle(self, id: i64, vehicle_type: &str, vendor: &str, model: &str) -> Self {
        self.tables.lock().unwrap().vehicles.insert(
            id,
            Vehicle {
                id,
                vehicle_type: vehicle_type.to_string(),
                vendor: vendor.to_string(),
                model: model.to_string(),
            },
        );
        self
    }

    /// Simula una base de datos caída: toda operación falla con un error opaco
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    /// Quita un vehículo sin respetar la foreign key, para ejercitar el inner join
    pub fn remove_vehicle(&self, id: i64) {
        self.tables.lock().unwrap().vehicles.remove(&id);
    }

    pub fn driver_count(&self) -> usize {
        self.tables.lock().unwrap().drivers.len()
    }

    /// Número de operaciones recibidas
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.offline.lock().unwrap() {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl DriverRepository for InMemoryDriverRepository {
    async fn add_driver(&self, driver: &NewDriver) -> Result<AddDriverResponse, StorageError> {
        self.enter()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.vehicles.contains_key(&driver.vehicle_id) {
            return Err(StorageError::InvalidReference(format!(
                "vehicle {} is not present in table \"vehicles\"",
                driver.vehicle_id
            )));
        }

        tables.next_id += 1;
        let id = tables.next_id;
        tables.drivers.push(Driver {
            id,
            name: driver.name.clone(),
            vehicle_id: driver.vehicle_id,
            score: driver.score,
        });
        Ok(AddDriverResponse { id })
    }

    async fn get_driver_by_id(&self, id: i64) -> Result<Driver, StorageError> {
        self.enter()?;
        let tables = self.tables.lock().unwrap();
        tables
            .drivers
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn get_full_driver_by_id(&self, id: i64) -> Result<FullDriver, StorageError> {
        self.enter()?;
        let tables = self.tables.lock().unwrap();
        let driver = tables
            .drivers
            .iter()
            .find(|d| d.id == id)
            .ok_or(StorageError::NotFound)?;
        let vehicle = tables
            .vehicles
            .get(&driver.vehicle_id)
            .cloned()
            .ok_or(StorageError::NotFound)?;

        Ok(FullDriver {
            id: driver.id,
            name: driver.name.clone(),
            vehicle,
            score: driver.score,
        })
    }

    async fn get_driver_list(&self) -> Result<Vec<Driver>, StorageError> {
        self.enter()?;
        Ok(self.tables.lock().unwrap().drivers.clone())
    }

    async fn count_drivers(&self) -> Result<i64, StorageError> {
        self.enter()?;
        Ok(self.tables.lock().unwrap().drivers.len() as i64)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.enter()
    }
}
