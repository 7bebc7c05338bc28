//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores de la API de DevCars
//! y su conversión a respuestas HTTP apropiadas.

use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                tracing::error!("❌ Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        details: None,
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                tracing::warn!("⚠️ Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: first_validation_message(&e)
                            .unwrap_or_else(|| "The provided data is invalid".to_string()),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            // 404 sin cuerpo
            AppError::NotFound(msg) => {
                tracing::warn!("🔍 Resource not found: {}", msg);
                return StatusCode::NOT_FOUND.into_response();
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("⚠️ Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("❌ Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: None,
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Buscar el primer mensaje legible dentro de un árbol de errores de validación.
///
/// Los campos se recorren en orden alfabético para que el mensaje sea estable.
fn first_validation_message(errors: &ValidationErrors) -> Option<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields.into_iter().find_map(|(field, kind)| match kind {
        ValidationErrorsKind::Field(list) => list.iter().find_map(|error| {
            error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .or_else(|| Some(format!("Field '{}' is invalid ({})", field, error.code)))
        }),
        ValidationErrorsKind::Struct(nested) => first_validation_message(nested),
        ValidationErrorsKind::List(items) => items
            .values()
            .find_map(|nested| first_validation_message(nested)),
    })
}

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    let mut error = ValidationError::new("custom");
    error.message = Some(Cow::Borrowed(message));
    error.add_param("field".into(), &field);

    let mut errors = ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = not_found_error("Car", 42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_validation_error_carries_message() {
        let response =
            validation_error("model", "Model cannot be longer than 50 characters").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body["message"], "Model cannot be longer than 50 characters");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_database_error_does_not_leak_details() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body["code"], "DB_ERROR");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_first_validation_message_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("price", ValidationError::new("non_negative"));
        assert_eq!(
            first_validation_message(&errors).as_deref(),
            Some("Field 'price' is invalid (non_negative)")
        );
    }
}
