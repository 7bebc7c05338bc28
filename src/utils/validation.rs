//! Utilidades de validación
//!
//! Funciones helper compartidas entre los DTOs (validator) y los
//! constructores de las entidades.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

/// Longitud máxima del modelo de un carro
pub const MAX_MODEL_LENGTH: usize = 50;

/// Longitud máxima de la marca (columna `VARCHAR(100)`)
pub const MAX_BRAND_LENGTH: usize = 100;

pub const MODEL_TOO_LONG_MESSAGE: &str = "Model cannot be longer than 50 characters";
pub const BRAND_TOO_LONG_MESSAGE: &str = "Brand cannot be longer than 100 characters";
pub const NEGATIVE_PRICE_MESSAGE: &str = "Price cannot be negative";
pub const TOTAL_COST_OVERFLOW_MESSAGE: &str = "Total cost of the order is too large";

/// Validar longitud máxima (en caracteres, no en bytes)
pub fn validate_max_length(value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        let mut error = ValidationError::new("length");
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar el modelo de un carro
pub fn validate_model_length(model: &str) -> Result<(), ValidationError> {
    validate_max_length(model, MAX_MODEL_LENGTH).map_err(|mut error| {
        error.message = Some(Cow::Borrowed(MODEL_TOO_LONG_MESSAGE));
        error
    })
}

pub fn validate_brand_length(brand: &str) -> Result<(), ValidationError> {
    validate_max_length(brand, MAX_BRAND_LENGTH).map_err(|mut error| {
        error.message = Some(Cow::Borrowed(BRAND_TOO_LONG_MESSAGE));
        error
    })
}

/// Validar un precio (carro o item extra)
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    validate_non_negative(*price).map_err(|mut error| {
        error.message = Some(Cow::Borrowed(NEGATIVE_PRICE_MESSAGE));
        error
    })
}
