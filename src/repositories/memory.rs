//! Almacenamiento en memoria
//!
//! Implementa los repositorios de carros, clientes y órdenes sobre tablas
//! en memoria protegidas por un único `RwLock`. Se usa con
//! `STORAGE_BACKEND=memory` y en los tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CarRepository, CustomerRepository, OrderRepository};
use crate::models::car::{Car, CarStatus, NewCar};
use crate::models::customer::{Customer, NewCustomer};
use crate::models::order::{ExtraOrderItem, NewOrder, Order};
use crate::utils::errors::{not_found_error, AppError, AppResult};

#[derive(Default)]
struct Tables {
    cars: BTreeMap<i32, Car>,
    customers: BTreeMap<i32, Customer>,
    orders: BTreeMap<i32, Order>,
    last_car_id: i32,
    last_customer_id: i32,
    last_order_id: i32,
    last_extra_item_id: i32,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarRepository for InMemoryStore {
    async fn create(&self, car: &NewCar) -> AppResult<Car> {
        let mut tables = self.tables.write().await;
        tables.last_car_id += 1;
        let created = car.clone().into_car(tables.last_car_id);
        tables.cars.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Car>> {
        Ok(self.tables.read().await.cars.get(&id).cloned())
    }

    async fn find_by_status(&self, status: CarStatus) -> AppResult<Vec<Car>> {
        let tables = self.tables.read().await;
        Ok(tables
            .cars
            .values()
            .filter(|car| car.status == status)
            .cloned()
            .collect())
    }

    async fn update(&self, car: &Car) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .cars
            .get_mut(&car.id)
            .ok_or_else(|| not_found_error("Car", car.id))?;

        // Mismas columnas que el UPDATE de PostgreSQL
        stored.color = car.color.clone();
        stored.price = car.price;
        stored.status = car.status;
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn create(&self, customer: &NewCustomer) -> AppResult<Customer> {
        let mut tables = self.tables.write().await;
        tables.last_customer_id += 1;
        let created = customer.clone().into_customer(tables.last_customer_id);
        tables.customers.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Customer>> {
        Ok(self.tables.read().await.customers.get(&id).cloned())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn create(&self, order: &NewOrder) -> AppResult<Order> {
        let mut tables = self.tables.write().await;

        // Equivalente a las foreign keys de orders
        if !tables.cars.contains_key(&order.id_car) {
            return Err(AppError::Internal(format!(
                "orders.id_car references missing car {}",
                order.id_car
            )));
        }
        if !tables.customers.contains_key(&order.id_customer) {
            return Err(AppError::Internal(format!(
                "orders.id_customer references missing customer {}",
                order.id_customer
            )));
        }

        tables.last_order_id += 1;
        let id = tables.last_order_id;

        let mut extra_items = Vec::with_capacity(order.extra_items.len());
        for item in &order.extra_items {
            tables.last_extra_item_id += 1;
            extra_items.push(ExtraOrderItem {
                id: tables.last_extra_item_id,
                id_order: id,
                description: item.description.clone(),
                price: item.price,
            });
        }

        let created = Order {
            id,
            id_car: order.id_car,
            id_customer: order.id_customer,
            total_cost: order.total_cost,
            extra_items,
        };
        tables.orders.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_customer_and_id(
        &self,
        id_customer: i32,
        id: i32,
    ) -> AppResult<Option<Order>> {
        let tables = self.tables.read().await;
        Ok(tables
            .orders
            .get(&id)
            .filter(|order| order.id_customer == id_customer)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::NewExtraOrderItem;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn new_car(model: &str) -> NewCar {
        NewCar::new(
            "9BD178".to_string(),
            "FIAT".to_string(),
            model.to_string(),
            2021,
            Decimal::new(50000, 0),
            "VERMELHO".to_string(),
            None,
        )
        .unwrap()
    }

    fn new_customer() -> NewCustomer {
        NewCustomer::new(
            "Maria Silva".to_string(),
            "123.456.789-00".to_string(),
            NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let store = InMemoryStore::new();
        let first = CarRepository::create(&store, &new_car("Palio")).await.unwrap();
        let second = CarRepository::create(&store, &new_car("Uno")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_find_by_status_filters_suspended() {
        let store = InMemoryStore::new();
        let palio = CarRepository::create(&store, &new_car("Palio")).await.unwrap();
        let mut uno = CarRepository::create(&store, &new_car("Uno")).await.unwrap();
        uno.set_as_suspended();
        store.update(&uno).await.unwrap();

        let available = store.find_by_status(CarStatus::Available).await.unwrap();
        assert_eq!(available, vec![palio]);

        let suspended = store.find_by_status(CarStatus::Suspended).await.unwrap();
        assert_eq!(suspended.len(), 1);
        assert_eq!(suspended[0].id, uno.id);
    }

    #[tokio::test]
    async fn test_update_missing_car_is_not_found() {
        let store = InMemoryStore::new();
        let ghost = new_car("Palio").into_car(99);
        assert!(matches!(store.update(&ghost).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_order_requires_existing_references() {
        let store = InMemoryStore::new();
        let order = NewOrder::new(1, 1, Decimal::new(50000, 0), Vec::new()).unwrap();
        assert!(matches!(
            OrderRepository::create(&store, &order).await,
            Err(AppError::Internal(_))
        ));
    }

    #[tokio::test]
    async fn test_order_lookup_uses_customer_and_id() {
        let store = InMemoryStore::new();
        let car = CarRepository::create(&store, &new_car("Palio")).await.unwrap();
        let customer = CustomerRepository::create(&store, &new_customer()).await.unwrap();

        let order = NewOrder::new(
            car.id,
            customer.id,
            car.price,
            vec![NewExtraOrderItem::new("Película".to_string(), Decimal::new(1000, 0))],
        )
        .unwrap();
        let created = OrderRepository::create(&store, &order).await.unwrap();
        assert_eq!(created.extra_items[0].id_order, created.id);

        let found = store
            .find_by_customer_and_id(customer.id, created.id)
            .await
            .unwrap();
        assert_eq!(found, Some(created.clone()));

        let other = store
            .find_by_customer_and_id(customer.id + 1, created.id)
            .await
            .unwrap();
        assert!(other.is_none());
    }
}
