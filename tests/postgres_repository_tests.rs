//! Tests de los repositorios PostgreSQL.
//!
//! Necesitan `DATABASE_URL`; sin ella cada test se salta.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use devcars_api::config::DatabaseConfig;
use devcars_api::database::{create_pool, run_migrations};
use devcars_api::models::car::{CarStatus, NewCar};
use devcars_api::models::customer::{Customer, NewCustomer};
use devcars_api::models::order::{NewExtraOrderItem, NewOrder};
use devcars_api::repositories::{
    CarRepository, CustomerRepository, OrderRepository, PgCarRepository, PgCustomerRepository,
    PgOrderRepository,
};
use devcars_api::utils::errors::AppError;

async fn test_pool() -> Option<PgPool> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("⏭️ DATABASE_URL no definida, test omitido");
        return None;
    };

    let mut config = DatabaseConfig::new(url);
    config.min_connections = 0;
    config.max_connections = 2;

    let pool = create_pool(&config).await.expect("database should be reachable");
    run_migrations(&pool).await.expect("migrations should apply");
    Some(pool)
}

fn new_car(price: Decimal) -> NewCar {
    NewCar::new(
        "9BD17164G5".to_string(),
        "FIAT".to_string(),
        "Palio".to_string(),
        2021,
        price,
        "V".repeat(60),
        NaiveDate::from_ymd_opt(2021, 4, 10),
    )
    .unwrap()
}

async fn new_customer(pool: &PgPool) -> Customer {
    PgCustomerRepository::new(pool.clone())
        .create(&NewCustomer::new(
            "Maria Silva".to_string(),
            "123.456.789-00".to_string(),
            NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
        ))
        .await
        .unwrap()
}

async fn orders_of(pool: &PgPool, id_customer: i32) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE id_customer = $1")
        .bind(id_customer)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_car_update_and_suspend_are_persisted() {
    let Some(pool) = test_pool().await else { return };
    let cars = PgCarRepository::new(pool.clone());

    let mut car = cars.create(&new_car(Decimal::new(50000, 0))).await.unwrap();
    assert_eq!(car.status, CarStatus::Available);
    assert_eq!(car.color.len(), 60);

    car.update("AZUL".to_string(), Decimal::new(4500050, 2)).unwrap();
    car.set_as_suspended();
    cars.update(&car).await.unwrap();

    let stored = cars.find_by_id(car.id).await.unwrap().unwrap();
    assert_eq!(stored, car);

    let available = cars.find_by_status(CarStatus::Available).await.unwrap();
    assert!(available.iter().all(|c| c.id != car.id));
}

#[tokio::test]
async fn test_update_missing_car_is_not_found() {
    let Some(pool) = test_pool().await else { return };
    let cars = PgCarRepository::new(pool);

    let ghost = new_car(Decimal::ONE).into_car(i32::MAX);
    assert!(matches!(cars.update(&ghost).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_order_is_stored_with_its_items() {
    let Some(pool) = test_pool().await else { return };
    let car = PgCarRepository::new(pool.clone())
        .create(&new_car(Decimal::new(50000, 0)))
        .await
        .unwrap();
    let customer = new_customer(&pool).await;
    let orders = PgOrderRepository::new(pool.clone());

    let half_cent = Decimal::new(5, 3);
    let order = NewOrder::new(
        car.id,
        customer.id,
        car.price,
        vec![
            NewExtraOrderItem::new("Adesivo".to_string(), half_cent),
            NewExtraOrderItem::new("Adesivo".to_string(), half_cent),
        ],
    )
    .unwrap();
    let created = orders.create(&order).await.unwrap();

    let found = orders
        .find_by_customer_and_id(customer.id, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);
    assert_eq!(found.total_cost, Decimal::new(5000001, 2));

    // Los precios se guardan sin redondeo
    let items: Decimal = found.extra_items.iter().map(|item| item.price).sum();
    assert_eq!(car.price + items, found.total_cost);
}

#[tokio::test]
async fn test_order_lookup_requires_its_customer() {
    let Some(pool) = test_pool().await else { return };
    let car = PgCarRepository::new(pool.clone())
        .create(&new_car(Decimal::new(50000, 0)))
        .await
        .unwrap();
    let owner = new_customer(&pool).await;
    let other = new_customer(&pool).await;
    let orders = PgOrderRepository::new(pool.clone());

    let order = NewOrder::new(car.id, owner.id, car.price, Vec::new()).unwrap();
    let created = orders.create(&order).await.unwrap();

    let found = orders.find_by_customer_and_id(other.id, created.id).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_failed_extra_item_rolls_back_the_order() {
    let Some(pool) = test_pool().await else { return };
    let car = PgCarRepository::new(pool.clone())
        .create(&new_car(Decimal::new(50000, 0)))
        .await
        .unwrap();
    let customer = new_customer(&pool).await;
    let orders = PgOrderRepository::new(pool.clone());

    // PostgreSQL no acepta el byte nulo en columnas de texto
    let order = NewOrder::new(
        car.id,
        customer.id,
        car.price,
        vec![
            NewExtraOrderItem::new("Som".to_string(), Decimal::ONE),
            NewExtraOrderItem::new("Alarme\0".to_string(), Decimal::ONE),
        ],
    )
    .unwrap();

    assert!(matches!(orders.create(&order).await, Err(AppError::Database(_))));
    assert_eq!(orders_of(&pool, customer.id).await, 0);
}
