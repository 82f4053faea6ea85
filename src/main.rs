use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use fleet_tracking::cache::{CacheConfig, RedisClient};
use fleet_tracking::config::database::DatabaseConfig;
use fleet_tracking::config::environment::EnvironmentConfig;
use fleet_tracking::database;
use fleet_tracking::routes::create_app;
use fleet_tracking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    let log_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚚 Fleet Tracking Backend");
    info!("=========================");

    // Inicializar base de datos
    let db_config = DatabaseConfig::from_env()?;
    let pool = match database::create_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    database::ensure_schema(&pool).await?;

    // Inicializar Redis; un Redis caído degrada el snapshot de
    // posiciones a cache MISS, no impide arrancar
    let cache_config = CacheConfig::from_env()?;
    let redis_client = RedisClient::new(cache_config)?;
    if let Err(e) = redis_client.ping().await {
        warn!("⚠️ Redis no disponible al arranque; snapshot de posiciones degradado: {}", e);
    }

    let addr: SocketAddr = config.server_url().parse()?;

    let app_state = AppState::new(pool, config, redis_client);
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Liveness probe");
    info!("🗺️ Rutas:");
    info!("   POST /api/routes - Registrar ruta");
    info!("   GET  /api/routes/latest - Últimas rutas con distancia y ETA");
    info!("⏱️ ETA:");
    info!("   POST /api/eta/predict - Estimación punto a punto");
    info!("🛰️ Traccar:");
    info!("   GET  /api/traccar/devices - Dispositivos del proveedor");
    info!("   GET  /api/traccar/positions - Posiciones en vivo (con snapshot)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
