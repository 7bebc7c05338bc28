use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};

use super::created;
use crate::dto::car_dto::{CarDetailsResponse, CarItemResponse, CreateCarRequest, UpdateCarRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/:id", get(get_car).put(update_car).delete(suspend_car))
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarItemResponse>>, AppError> {
    let response = state.car_controller().list_available().await?;
    Ok(Json(response))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CarDetailsResponse>, AppError> {
    let response = state.car_controller().get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CreateCarRequest>,
) -> Result<Response, AppError> {
    let car = state.car_controller().create(&request).await?;
    Ok(created(format!("/api/cars/{}", car.id), request))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCarRequest>,
) -> Result<StatusCode, AppError> {
    state.car_controller().update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

// DELETE no borra la fila: marca el carro como suspendido
async fn suspend_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.car_controller().suspend(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
