//! DevCars API
//!
//! Servicio HTTP para el inventario de carros, clientes y órdenes de venta
//! de una concesionaria.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_app_router;
pub use state::AppState;
