use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::OrderRepository;
use crate::models::order::{ExtraOrderItem, NewOrder, Order};
use crate::utils::errors::AppResult;

// Fila de la tabla orders, sin los items extra
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i32,
    id_car: i32,
    id_customer: i32,
    total_cost: Decimal,
}

impl OrderRow {
    fn with_items(self, extra_items: Vec<ExtraOrderItem>) -> Order {
        Order {
            id: self.id,
            id_car: self.id_car,
            id_customer: self.id_customer,
            total_cost: self.total_cost,
            extra_items,
        }
    }
}

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: &NewOrder) -> AppResult<Order> {
        // Orden + items en la misma transacción; si algo falla se hace rollback al soltar `tx`
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (id_car, id_customer, total_cost)
            VALUES ($1, $2, $3)
            RETURNING id, id_car, id_customer, total_cost
            "#,
        )
        .bind(order.id_car)
        .bind(order.id_customer)
        .bind(order.total_cost)
        .fetch_one(&mut *tx)
        .await?;

        let mut extra_items = Vec::with_capacity(order.extra_items.len());
        for item in &order.extra_items {
            let created = sqlx::query_as::<_, ExtraOrderItem>(
                r#"
                INSERT INTO extra_order_items (id_order, description, price)
                VALUES ($1, $2, $3)
                RETURNING id, id_order, description, price
                "#,
            )
            .bind(row.id)
            .bind(&item.description)
            .bind(item.price)
            .fetch_one(&mut *tx)
            .await?;

            extra_items.push(created);
        }

        tx.commit().await?;

        Ok(row.with_items(extra_items))
    }

    async fn find_by_customer_and_id(
        &self,
        id_customer: i32,
        id: i32,
    ) -> AppResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, id_car, id_customer, total_cost
            FROM orders
            WHERE id = $1 AND id_customer = $2
            "#,
        )
        .bind(id)
        .bind(id_customer)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let extra_items = sqlx::query_as::<_, ExtraOrderItem>(
            r#"
            SELECT id, id_order, description, price
            FROM extra_order_items
            WHERE id_order = $1
            ORDER BY id
            "#,
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(row.with_items(extra_items)))
    }
}
