//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del servidor HTTP.

use std::net::SocketAddr;
use std::time::Duration;

use super::{env_lookup, parse_var, ConfigError};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "REQUEST_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
            });
        }

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            request_timeout: Duration::from_secs(timeout_secs),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Dirección de escucha del servidor
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::Invalid { name: "HOST", value: addr })
    }
}
