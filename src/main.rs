use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use devcars_api::config::{DatabaseConfig, EnvironmentConfig, StorageBackend};
use devcars_api::{create_app_router, database, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 DevCars API - Inventario, clientes y órdenes");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    let app_state = match config.storage_backend {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = match database::create_pool(&db_config).await {
                Ok(pool) => pool,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {:#}", e);
                    return Err(e);
                }
            };

            if config.run_migrations {
                database::run_migrations(&pool).await?;
            }

            AppState::with_postgres(pool, config.clone())
        }
        StorageBackend::Memory => {
            if config.is_production() {
                warn!("⚠️ STORAGE_BACKEND=memory en producción: los datos no persisten");
            }
            AppState::in_memory(config.clone())
        }
    };

    let app = create_app_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.server_url())
        .await
        .with_context(|| format!("could not bind {}", config.server_url()))?;
    let addr = listener.local_addr()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("🚗 Cars:");
    info!("   GET    /api/cars - Listar carros disponibles");
    info!("   GET    /api/cars/:id - Obtener carro");
    info!("   POST   /api/cars - Registrar carro");
    info!("   PUT    /api/cars/:id - Actualizar color y precio");
    info!("   DELETE /api/cars/:id - Suspender carro");
    info!("👤 Customers:");
    info!("   POST   /api/customers - Registrar cliente");
    info!("   POST   /api/customers/:id/orders - Crear orden");
    info!("   GET    /api/customers/:id/orders/:order_id - Obtener orden");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
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
