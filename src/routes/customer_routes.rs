use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};

use super::created;
use crate::dto::customer_dto::CreateCustomerRequest;
use crate::dto::order_dto::{CreateOrderRequest, OrderDetailsResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_customer))
        .route("/:id/orders", post(create_order))
        .route("/:id/orders/:order_id", get(get_order))
}

async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<StatusCode, AppError> {
    state.customer_controller().create(request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Response, AppError> {
    let order = state.order_controller().create(id, &request).await?;
    Ok(created(
        format!("/api/customers/{}/orders/{}", order.id_customer, order.id),
        request,
    ))
}

async fn get_order(
    State(state): State<AppState>,
    Path((id, order_id)): Path<(i32, i32)>,
) -> Result<Json<OrderDetailsResponse>, AppError> {
    let response = state.order_controller().get(id, order_id).await?;
    Ok(Json(response))
}
