//! Order summary produced by the aggregation endpoint

use serde::{Deserialize, Serialize};

/// One enriched line of an order summary
///
/// Food / order / table fields are `None` when the joined document is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderItemLine {
    /// Resolved food price
    pub amount: Option<f64>,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub table_number: Option<i64>,
    pub table_id: Option<String>,
    pub order_id: Option<String>,
    /// Same value as `amount`
    pub price: Option<f64>,
    pub quantity: i64,
}

/// Priced summary of one order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub payment_due: f64,
    pub total_count: u64,
    pub table_number: Option<i64>,
    pub order_items: Vec<OrderItemLine>,
}
