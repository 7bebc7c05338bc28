//! Repositorios
//!
//! Un trait por entidad. Las implementaciones PostgreSQL usan SQL explícito
//! sobre un `PgPool`; `InMemoryStore` implementa los tres traits en memoria.

use async_trait::async_trait;

use crate::models::car::{Car, CarStatus, NewCar};
use crate::models::customer::{Customer, NewCustomer};
use crate::models::order::{NewOrder, Order};
use crate::utils::errors::AppResult;

pub mod car_repository;
pub mod customer_repository;
pub mod memory;
pub mod order_repository;

pub use car_repository::PgCarRepository;
pub use customer_repository::PgCustomerRepository;
pub use memory::InMemoryStore;
pub use order_repository::PgOrderRepository;

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn create(&self, car: &NewCar) -> AppResult<Car>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Car>>;

    /// Carros con el estado dado, ordenados por id
    async fn find_by_status(&self, status: CarStatus) -> AppResult<Vec<Car>>;

    /// Persistir color, precio y estado
    async fn update(&self, car: &Car) -> AppResult<()>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, customer: &NewCustomer) -> AppResult<Customer>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Customer>>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserta la orden y sus items extra de forma atómica
    async fn create(&self, order: &NewOrder) -> AppResult<Order>;

    async fn find_by_customer_and_id(&self, id_customer: i32, id: i32)
        -> AppResult<Option<Order>>;
}
