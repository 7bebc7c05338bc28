//! Modelo de Order y ExtraOrderItem
//!
//! El costo total se calcula una sola vez al crear la orden
//! (precio del carro + items extra) y se persiste tal cual.

use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::TOTAL_COST_OVERFLOW_MESSAGE;

/// Item extra, siempre pertenece a una orden
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ExtraOrderItem {
    pub id: i32,
    pub id_order: i32,
    pub description: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExtraOrderItem {
    pub description: String,
    pub price: Decimal,
}

impl NewExtraOrderItem {
    pub fn new(description: String, price: Decimal) -> Self {
        Self { description, price }
    }
}

/// Order persistida junto con sus items extra
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub id_car: i32,
    pub id_customer: i32,
    pub total_cost: Decimal,
    pub extra_items: Vec<ExtraOrderItem>,
}

impl Order {
    pub fn extra_item_descriptions(&self) -> Vec<String> {
        self.extra_items
            .iter()
            .map(|item| item.description.clone())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub id_car: i32,
    pub id_customer: i32,
    pub total_cost: Decimal,
    pub extra_items: Vec<NewExtraOrderItem>,
}

impl NewOrder {
    /// El total no puede desbordar `Decimal`; en ese caso la orden se rechaza
    pub fn new(
        id_car: i32,
        id_customer: i32,
        car_price: Decimal,
        extra_items: Vec<NewExtraOrderItem>,
    ) -> AppResult<Self> {
        let total_cost = extra_items
            .iter()
            .try_fold(car_price, |total, item| total.checked_add(item.price))
            .ok_or_else(|| validation_error("extraItems", TOTAL_COST_OVERFLOW_MESSAGE))?;

        Ok(Self {
            id_car,
            id_customer,
            total_cost,
            extra_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    #[test]
    fn test_total_cost_adds_extra_items_to_car_price() {
        let order = NewOrder::new(
            1,
            1,
            Decimal::new(50000, 0),
            vec![
                NewExtraOrderItem::new("Película".to_string(), Decimal::new(1000, 0)),
                NewExtraOrderItem::new("Som".to_string(), Decimal::new(2500, 0)),
            ],
        )
        .unwrap();
        assert_eq!(order.total_cost, Decimal::new(53500, 0));
    }

    #[test]
    fn test_total_cost_without_extras_is_car_price() {
        let order = NewOrder::new(1, 1, Decimal::new(1999999, 2), Vec::new()).unwrap();
        assert_eq!(order.total_cost, Decimal::new(1999999, 2));
        assert!(order.extra_items.is_empty());
    }

    #[test]
    fn test_total_cost_overflow_is_a_validation_error() {
        let result = NewOrder::new(
            1,
            1,
            Decimal::MAX,
            vec![NewExtraOrderItem::new("Som".to_string(), Decimal::ONE)],
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_extra_item_descriptions_keep_order() {
        let order = Order {
            id: 7,
            id_car: 1,
            id_customer: 2,
            total_cost: Decimal::new(3, 0),
            extra_items: vec![
                ExtraOrderItem {
                    id: 1,
                    id_order: 7,
                    description: "Tapetes".to_string(),
                    price: Decimal::ONE,
                },
                ExtraOrderItem {
                    id: 2,
                    id_order: 7,
                    description: "Alarme".to_string(),
                    price: Decimal::new(2, 0),
                },
            ],
        };
        assert_eq!(order.extra_item_descriptions(), vec!["Tapetes", "Alarme"]);
    }
}
