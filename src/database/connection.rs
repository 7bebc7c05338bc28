//! Conexión a PostgreSQL
//!
//! Crea el pool a partir de `DatabaseConfig` y aplica las migraciones
//! embebidas en `migrations/`.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::database::DatabaseConfig;

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    info!("🐘 Conectando a PostgreSQL en {}", config.masked_url());

    let pool = config
        .create_pool()
        .await
        .with_context(|| format!("could not connect to {}", config.masked_url()))?;

    info!("✅ Pool de conexiones listo (max {})", config.max_connections);
    Ok(pool)
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run database migrations")?;

    info!("✅ Migraciones aplicadas");
    Ok(())
}
