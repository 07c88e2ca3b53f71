//! Order Item Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::food::MAX_PRICE;
use crate::types::Timestamp;

/// Maximum allowed quantity per item
pub const MAX_QUANTITY: i64 = 9999;

/// Order item entity (订单明细)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItem {
    pub order_item_id: String,
    pub order_id: String,
    pub food_id: String,
    pub quantity: i64,
    /// Always stored rounded to 2 decimal places
    pub unit_price: f64,
    /// Position inside the placed order, breaks ties on `created_at`
    pub line_no: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One line of a place-order request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemInput {
    #[validate(length(min = 1, max = 64))]
    pub food_id: String,
    #[validate(range(min = 1, max = MAX_QUANTITY))]
    pub quantity: i64,
    #[validate(range(min = -MAX_PRICE, max = MAX_PRICE))]
    pub unit_price: f64,
}

/// Place-order payload: one order at `table_id` holding every item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlaceOrder {
    #[validate(length(min = 1, max = 64))]
    pub table_id: String,
    #[validate(length(min = 1), nested)]
    pub order_items: Vec<OrderItemInput>,
}

/// Update order item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = -MAX_PRICE, max = MAX_PRICE))]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = MAX_QUANTITY))]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 64))]
    pub food_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: i64) -> OrderItemInput {
        OrderItemInput {
            food_id: "f-1".into(),
            quantity,
            unit_price: 4.5,
        }
    }

    #[test]
    fn test_place_order_validates_each_line() {
        let ok = PlaceOrder {
            table_id: "t-1".into(),
            order_items: vec![line(1), line(2)],
        };
        assert!(ok.validate().is_ok());

        let bad = PlaceOrder {
            table_id: "t-1".into(),
            order_items: vec![line(1), line(0)],
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_place_order_requires_items() {
        let empty = PlaceOrder {
            table_id: "t-1".into(),
            order_items: vec![],
        };
        assert!(empty.validate().is_err());
    }
}
