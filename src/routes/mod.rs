//! Rutas HTTP
//!
//! Cada recurso tiene su router; `create_app_router` los monta bajo `/api`
//! junto con CORS y el trace de requests.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

pub mod car_routes;
pub mod customer_routes;

pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/cars", car_routes::create_car_router())
        .nest("/api/customers", customer_routes::create_customer_router())
        .layer(cors_middleware(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 201 con el header Location y el input recibido como cuerpo
pub(crate) fn created<T: Serialize>(location: String, body: T) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
