//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de PostgreSQL con SQLx.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};

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
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }

    /// DATABASE_URL es obligatoria; el tamaño del pool es opcional
    pub fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL")
            .context("DATABASE_URL must be set when STORAGE_BACKEND=postgres")?;
        let mut config = Self::new(url);

        if let Ok(value) = env::var("DB_MAX_CONNECTIONS") {
            config.max_connections = value
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a number, got '{}'", value))?;
        }
        if let Ok(value) = env::var("DB_MIN_CONNECTIONS") {
            config.min_connections = value
                .parse()
                .with_context(|| format!("DB_MIN_CONNECTIONS must be a number, got '{}'", value))?;
        }

        Ok(config)
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections.min(self.max_connections))
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }

    /// URL con las credenciales ocultas, para logs
    pub fn masked_url(&self) -> String {
        mask_database_url(&self.url)
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    match url.find("://") {
        Some(scheme_end) if scheme_end + 3 <= at_pos => {
            format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
