//! Modelos del sistema
//!
//! Este módulo contiene las entidades que mapean al schema PostgreSQL
//! (cars, customers, orders, extra_order_items).

pub mod car;
pub mod customer;
pub mod order;
