//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. Los servicios
//! se exponen como traits para que los handlers no dependan de la
//! implementación concreta.

pub mod driver_service;

pub use driver_service::*;
