//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del pool de PostgreSQL con SQLx.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{env_lookup, parse_var, ConfigError};

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 10u32)?;
        let min_connections = parse_var(&lookup, "DATABASE_MIN_CONNECTIONS", 1u32)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value: max_connections.to_string(),
            });
        }
        if min_connections > max_connections {
            return Err(ConfigError::Invalid {
                name: "DATABASE_MIN_CONNECTIONS",
                value: min_connections.to_string(),
            });
        }

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout: Duration::from_secs(parse_var(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                30u64,
            )?),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        })
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        self.pool_options().connect(&self.url).await
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
    }
}
