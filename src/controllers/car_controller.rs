use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::car_dto::{
    CarDetailsResponse, CarItemResponse, CreateCarRequest, UpdateCarRequest,
};
use crate::models::car::{Car, CarStatus, NewCar};
use crate::repositories::CarRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct CarController {
    repository: Arc<dyn CarRepository>,
}

impl CarController {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self { repository }
    }

    /// Carros disponibles (los suspendidos quedan fuera)
    pub async fn list_available(&self) -> AppResult<Vec<CarItemResponse>> {
        let cars = self.repository.find_by_status(CarStatus::Available).await?;
        Ok(cars.into_iter().map(CarItemResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<CarDetailsResponse> {
        let car = self.find_car(id).await?;
        Ok(CarDetailsResponse::from(car))
    }

    pub async fn create(&self, request: &CreateCarRequest) -> AppResult<Car> {
        request.validate()?;

        let new_car = NewCar::new(
            request.vin_code.clone(),
            request.brand.clone(),
            request.model.clone(),
            request.year,
            request.price,
            request.color.clone(),
            request.production_date,
        )?;

        let car = self.repository.create(&new_car).await?;
        info!("🚗 Carro {} registrado ({} {})", car.id, car.brand, car.model);
        Ok(car)
    }

    pub async fn update(&self, id: i32, request: UpdateCarRequest) -> AppResult<()> {
        request.validate()?;

        let mut car = self.find_car(id).await?;
        car.update(request.color, request.price)?;
        self.repository.update(&car).await?;

        info!("✏️ Carro {} actualizado", id);
        Ok(())
    }

    /// Baja lógica: el carro sigue accesible por id
    pub async fn suspend(&self, id: i32) -> AppResult<()> {
        let mut car = self.find_car(id).await?;
        if !car.is_available() {
            info!("⛔ Carro {} ya estaba suspendido", id);
            return Ok(());
        }

        car.set_as_suspended();
        self.repository.update(&car).await?;

        info!("⛔ Carro {} suspendido", id);
        Ok(())
    }

    async fn find_car(&self, id: i32) -> AppResult<Car> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", id))
    }
}
