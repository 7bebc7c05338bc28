//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Backend de persistencia
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow!(
                "STORAGE_BACKEND must be 'postgres' or 'memory', got '{}'",
                other
            )),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: tracing::Level,
    pub storage_backend: StorageBackend,
    pub cors_origins: Vec<String>,
    pub run_migrations: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: tracing::Level::INFO,
            storage_backend: StorageBackend::Postgres,
            cors_origins: Vec::new(),
            run_migrations: true,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde variables de entorno, con valores por defecto
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", value))?,
            None => defaults.port,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => tracing::Level::from_str(value.trim())
                .map_err(|_| anyhow!("LOG_LEVEL is not a valid level: '{}'", value))?,
            None => defaults.log_level,
        };

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.storage_backend,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| anyhow!("RUN_MIGRATIONS must be true or false, got '{}'", value))?,
            None => defaults.run_migrations,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: lookup("HOST").unwrap_or(defaults.host),
            log_level,
            storage_backend,
            cors_origins,
            run_migrations,
        })
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<EnvironmentConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.storage_backend, StorageBackend::Postgres);
        assert!(config.run_migrations);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("LOG_LEVEL", "debug"),
            ("STORAGE_BACKEND", "memory"),
            ("CORS_ORIGINS", "http://localhost:5173, https://devcars.com.br"),
            ("RUN_MIGRATIONS", "false"),
        ])
        .unwrap();
        assert!(config.is_production());
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "https://devcars.com.br"]
        );
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(config_from(&[("PORT", "abc")]).is_err());
    }

    #[test]
    fn test_invalid_backend_is_an_error() {
        assert!(config_from(&[("STORAGE_BACKEND", "redis")]).is_err());
    }
}
