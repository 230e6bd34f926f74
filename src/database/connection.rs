//! Conexión a PostgreSQL
//!
//! Construye el pool una única vez al arrancar; el pool se inyecta después
//! en cada capa, nunca se accede como estado global.

use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Crear el pool de conexiones a la base de datos
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    info!(
        "🗄️ Conectando a {} (max_connections={}, min_connections={})",
        mask_database_url(&config.url),
        config.max_connections,
        config.min_connections
    );

    let pool = config.create_pool().await?;

    info!("✅ Pool de PostgreSQL listo");
    Ok(pool)
}

/// Enmascara usuario y contraseña de la URL para los logs
pub fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    let scheme_end = url.find("://").map(|pos| pos + 3).unwrap_or(0);
    if scheme_end > at_pos {
        return url.to_string();
    }

    format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
}
