use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::car::Car;
use crate::utils::validation::{validate_brand_length, validate_model_length, validate_price};

// Request para registrar un carro
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[validate(custom = "validate_brand_length")]
    pub brand: String,
    #[validate(custom = "validate_model_length")]
    pub model: String,
    pub vin_code: String,
    pub year: i32,
    pub color: String,
    #[validate(custom = "validate_price")]
    pub price: Decimal,
    pub production_date: Option<NaiveDate>,
}

// Request para actualizar color y precio
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    pub color: String,
    #[validate(custom = "validate_price")]
    pub price: Decimal,
}

// Item del listado de carros disponibles
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarItemResponse {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub price: Decimal,
}

// Detalle completo de un carro
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDetailsResponse {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub vin_code: String,
    pub year: i32,
    pub color: String,
    pub price: Decimal,
    pub production_date: NaiveDate,
}

impl From<Car> for CarItemResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            brand: car.brand,
            model: car.model,
            price: car.price,
        }
    }
}

impl From<Car> for CarDetailsResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            brand: car.brand,
            model: car.model,
            vin_code: car.vin_code,
            year: car.year,
            color: car.color,
            price: car.price,
            production_date: car.production_date,
        }
    }
}
