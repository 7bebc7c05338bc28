use async_trait::async_trait;
use sqlx::PgPool;

use super::CarRepository;
use crate::models::car::{Car, CarStatus, NewCar};
use crate::utils::errors::{not_found_error, AppResult};

const CAR_COLUMNS: &str = "id, brand, model, vin_code, year, color, price, production_date, status";

pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn create(&self, car: &NewCar) -> AppResult<Car> {
        let query = format!(
            r#"
            INSERT INTO cars (brand, model, vin_code, year, color, price, production_date, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            CAR_COLUMNS
        );

        let created = sqlx::query_as::<_, Car>(&query)
            .bind(&car.brand)
            .bind(&car.model)
            .bind(&car.vin_code)
            .bind(car.year)
            .bind(&car.color)
            .bind(car.price)
            .bind(car.production_date)
            .bind(car.status)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Car>> {
        let query = format!("SELECT {} FROM cars WHERE id = $1", CAR_COLUMNS);

        let car = sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    async fn find_by_status(&self, status: CarStatus) -> AppResult<Vec<Car>> {
        let query = format!(
            "SELECT {} FROM cars WHERE status = $1 ORDER BY id",
            CAR_COLUMNS
        );

        let cars = sqlx::query_as::<_, Car>(&query)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;

        Ok(cars)
    }

    async fn update(&self, car: &Car) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE cars
            SET color = $2, price = $3, status = $4
            WHERE id = $1
            "#,
        )
        .bind(car.id)
        .bind(&car.color)
        .bind(car.price)
        .bind(car.status)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Car", car.id));
        }

        Ok(())
    }
}
