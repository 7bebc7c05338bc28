pub mod car_dto;
pub mod customer_dto;
pub mod order_dto;
