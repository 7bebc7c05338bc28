//! Modelo de Car
//!
//! Este módulo contiene el struct Car y su borrador NewCar.
//! Mapea exactamente a la tabla cars con primary key 'id'.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{
    validate_brand_length, validate_model_length, validate_price, BRAND_TOO_LONG_MESSAGE,
    MODEL_TOO_LONG_MESSAGE, NEGATIVE_PRICE_MESSAGE,
};

/// Estado del carro - se persiste como entero (0 = Available)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[repr(i32)]
pub enum CarStatus {
    Available = 0,
    Suspended = 1,
}

/// Car persistido
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Car {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub vin_code: String,
    pub year: i32,
    pub color: String,
    pub price: Decimal,
    pub production_date: NaiveDate,
    pub status: CarStatus,
}

impl Car {
    /// Cambiar color y precio; el resto de campos es inmutable
    pub fn update(&mut self, color: String, price: Decimal) -> AppResult<()> {
        if validate_price(&price).is_err() {
            return Err(validation_error("price", NEGATIVE_PRICE_MESSAGE));
        }
        self.color = color;
        self.price = price;
        Ok(())
    }

    /// Baja lógica. No existe la transición inversa.
    pub fn set_as_suspended(&mut self) {
        self.status = CarStatus::Suspended;
    }

    pub fn is_available(&self) -> bool {
        self.status == CarStatus::Available
    }
}

/// Car todavía no persistido
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub vin_code: String,
    pub year: i32,
    pub color: String,
    pub price: Decimal,
    pub production_date: NaiveDate,
    pub status: CarStatus,
}

impl NewCar {
    pub fn new(
        vin_code: String,
        brand: String,
        model: String,
        year: i32,
        price: Decimal,
        color: String,
        production_date: Option<NaiveDate>,
    ) -> AppResult<Self> {
        if validate_model_length(&model).is_err() {
            return Err(validation_error("model", MODEL_TOO_LONG_MESSAGE));
        }
        if validate_brand_length(&brand).is_err() {
            return Err(validation_error("brand", BRAND_TOO_LONG_MESSAGE));
        }
        if validate_price(&price).is_err() {
            return Err(validation_error("price", NEGATIVE_PRICE_MESSAGE));
        }

        Ok(Self {
            brand,
            model,
            vin_code,
            year,
            color,
            price,
            production_date: production_date.unwrap_or_else(|| Utc::now().date_naive()),
            status: CarStatus::Available,
        })
    }

    pub fn into_car(self, id: i32) -> Car {
        Car {
            id,
            brand: self.brand,
            model: self.model,
            vin_code: self.vin_code,
            year: self.year,
            color: self.color,
            price: self.price,
            production_date: self.production_date,
            status: self.status,
        }
    }
}
