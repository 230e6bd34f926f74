//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos y del servidor,
//! leída de variables de entorno (y de `.env` vía dotenvy).

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;

use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Lee una variable opcional y la parsea, usando `default` si no existe
pub(crate) fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

/// Lookup por defecto sobre el entorno del proceso
pub(crate) fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
