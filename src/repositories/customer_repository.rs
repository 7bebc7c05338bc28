use async_trait::async_trait;
use sqlx::PgPool;

use super::CustomerRepository;
use crate::models::customer::{Customer, NewCustomer};
use crate::utils::errors::AppResult;

pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, customer: &NewCustomer) -> AppResult<Customer> {
        let created = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (full_name, document, birth_date)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, document, birth_date
            "#,
        )
        .bind(&customer.full_name)
        .bind(&customer.document)
        .bind(customer.birth_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, full_name, document, birth_date FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }
}
