//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde diferentes orígenes.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::environment::EnvironmentConfig;

/// CORS según la configuración: sin orígenes configurados se permite cualquiera
pub fn cors_middleware(config: &EnvironmentConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        CorsLayer::very_permissive()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    }
}

/// Crear middleware de CORS con orígenes específicos
pub fn cors_middleware_with_origins(origins: &[String]) -> CorsLayer {
    // Los orígenes que no son un header válido se ignoran
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .expose_headers([header::LOCATION])
        .max_age(std::time::Duration::from_secs(3600))
}
