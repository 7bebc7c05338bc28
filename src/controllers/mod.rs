pub mod car_controller;
pub mod customer_controller;
pub mod order_controller;
