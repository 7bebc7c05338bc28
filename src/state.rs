//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los repositorios se inyectan al construirlo.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::controllers::car_controller::CarController;
use crate::controllers::customer_controller::CustomerController;
use crate::controllers::order_controller::OrderController;
use crate::repositories::{
    CarRepository, CustomerRepository, InMemoryStore, OrderRepository, PgCarRepository,
    PgCustomerRepository, PgOrderRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub cars: Arc<dyn CarRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub orders: Arc<dyn OrderRepository>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        cars: Arc<dyn CarRepository>,
        customers: Arc<dyn CustomerRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            config,
            cars,
            customers,
            orders,
        }
    }

    /// Repositorios PostgreSQL sobre el mismo pool
    pub fn with_postgres(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self::new(
            config,
            Arc::new(PgCarRepository::new(pool.clone())),
            Arc::new(PgCustomerRepository::new(pool.clone())),
            Arc::new(PgOrderRepository::new(pool)),
        )
    }

    /// Los tres repositorios comparten las mismas tablas en memoria
    pub fn in_memory(config: EnvironmentConfig) -> Self {
        let store = InMemoryStore::new();
        Self::new(
            config,
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }

    pub fn car_controller(&self) -> CarController {
        CarController::new(self.cars.clone())
    }

    pub fn customer_controller(&self) -> CustomerController {
        CustomerController::new(self.customers.clone())
    }

    pub fn order_controller(&self) -> OrderController {
        OrderController::new(self.cars.clone(), self.customers.clone(), self.orders.clone())
    }
}
