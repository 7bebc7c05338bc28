use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::order::{NewExtraOrderItem, Order};
use crate::utils::validation::validate_price;

// Item extra dentro del request de orden
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExtraItemRequest {
    pub description: String,
    #[validate(custom = "validate_price")]
    pub price: Decimal,
}

// Request para crear una orden
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub id_car: i32,
    pub id_customer: i32,
    #[serde(default)]
    #[validate]
    pub extra_items: Vec<ExtraItemRequest>,
}

impl CreateOrderRequest {
    pub fn new_extra_items(&self) -> Vec<NewExtraOrderItem> {
        self.extra_items
            .iter()
            .map(|item| NewExtraOrderItem::new(item.description.clone(), item.price))
            .collect()
    }
}

// Detalle de una orden
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailsResponse {
    pub id_car: i32,
    pub id_customer: i32,
    pub total_cost: Decimal,
    pub extra_item_descriptions: Vec<String>,
}

impl From<Order> for OrderDetailsResponse {
    fn from(order: Order) -> Self {
        Self {
            extra_item_descriptions: order.extra_item_descriptions(),
            id_car: order.id_car,
            id_customer: order.id_customer,
            total_cost: order.total_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extra_items_default_to_empty() {
        let request: CreateOrderRequest =
            serde_json::from_value(json!({ "idCar": 1, "idCustomer": 2 })).unwrap();
        assert!(request.extra_items.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_negative_extra_item_price_is_rejected() {
        let request: CreateOrderRequest = serde_json::from_value(json!({
            "idCar": 1,
            "idCustomer": 2,
            "extraItems": [
                { "description": "Película", "price": 1000 },
                { "description": "Desconto", "price": -50 }
            ]
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_new_extra_items_keep_input_order() {
        let request: CreateOrderRequest = serde_json::from_value(json!({
            "idCar": 1,
            "idCustomer": 2,
            "extraItems": [
                { "description": "Película", "price": 1000 },
                { "description": "Som", "price": 2500 }
            ]
        }))
        .unwrap();
        let items = request.new_extra_items();
        assert_eq!(items[0].description, "Película");
        assert_eq!(items[1].price, Decimal::new(2500, 0));
    }
}
