//! Repositorios
//!
//! Capa de acceso a datos: una query parametrizada por operación.

pub mod driver_repository;
#[cfg(test)]
pub mod memory_repository;

pub use driver_repository::{DriverRepository, PgDriverRepository};
