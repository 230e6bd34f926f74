//! Módulo de base de datos
//!
//! Maneja la conexión con PostgreSQL

pub mod connection;

pub use connection::{create_pool, mask_database_url};
