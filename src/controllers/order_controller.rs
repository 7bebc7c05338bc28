use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::order_dto::{CreateOrderRequest, OrderDetailsResponse};
use crate::models::order::{NewOrder, Order};
use crate::repositories::{CarRepository, CustomerRepository, OrderRepository};
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};

pub struct OrderController {
    cars: Arc<dyn CarRepository>,
    customers: Arc<dyn CustomerRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl OrderController {
    pub fn new(
        cars: Arc<dyn CarRepository>,
        customers: Arc<dyn CustomerRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            cars,
            customers,
            orders,
        }
    }

    /// Crear una orden para el cliente `id_customer` de la ruta.
    ///
    /// El costo total queda fijado con el precio actual del carro más la suma
    /// de los items extra.
    pub async fn create(&self, id_customer: i32, request: &CreateOrderRequest) -> AppResult<Order> {
        request.validate()?;

        if request.id_customer != id_customer {
            return Err(bad_request_error(
                "idCustomer in the body does not match the customer in the route",
            ));
        }

        self.customers
            .find_by_id(id_customer)
            .await?
            .ok_or_else(|| not_found_error("Customer", id_customer))?;

        let car = self
            .cars
            .find_by_id(request.id_car)
            .await?
            .ok_or_else(|| not_found_error("Car", request.id_car))?;

        let new_order = NewOrder::new(car.id, id_customer, car.price, request.new_extra_items())?;
        let order = self.orders.create(&new_order).await?;

        info!(
            "🧾 Orden {} creada para cliente {} (carro {}, total {})",
            order.id, order.id_customer, order.id_car, order.total_cost
        );
        Ok(order)
    }

    /// La orden debe pertenecer al cliente de la ruta
    pub async fn get(&self, id_customer: i32, id_order: i32) -> AppResult<OrderDetailsResponse> {
        let order = self
            .orders
            .find_by_customer_and_id(id_customer, id_order)
            .await?
            .ok_or_else(|| not_found_error("Order", id_order))?;

        Ok(OrderDetailsResponse::from(order))
    }
}
