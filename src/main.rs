use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use driver_registry::config::{DatabaseConfig, EnvironmentConfig};
use driver_registry::{build_router, database, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno; `.env` es opcional
    if let Err(e) = dotenv() {
        if !e.not_found() {
            return Err(e).context("Error leyendo .env");
        }
    }

    // Configurar logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("🚗 Driver Registry API");
    info!("================================================");

    let env_config = EnvironmentConfig::from_env().context("Configuración del servidor inválida")?;
    let db_config = DatabaseConfig::from_env().context("Configuración de base de datos inválida")?;

    // Inicializar base de datos
    let pool = match database::create_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let state = AppState::from_pool(pool.clone());

    // Sondeo de arranque: falla rápido si falta el esquema
    let driver_count = state
        .driver_service
        .count_drivers()
        .await
        .context("No se pudo consultar la tabla drivers")?;
    info!("👥 Drivers en el sistema: {}", driver_count);

    let app = build_router(state, &env_config);
    let addr = env_config.socket_addr()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   POST /addDriver - Crear driver");
    info!("   GET  /driver/:id - Obtener driver");
    info!("   GET  /driver/:id/full - Obtener driver con vehículo");
    info!("   GET  /drivers - Listar drivers");
    info!("   GET  /ping - Ping");
    info!("   GET  /health - Estado de la base de datos");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("No se pudo escuchar en {}", addr))?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &served {
        error!("❌ Error del servidor: {}", e);
    }

    pool.close().await;
    served.context("Error del servidor")?;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("⚠️ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("⚠️ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
