//! Order Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Timestamp;

/// Order entity (订单)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub order_id: String,
    /// Table the order was placed at
    pub table_id: String,
    pub order_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    #[validate(length(min = 1, max = 64))]
    pub table_id: String,
    /// Defaults to the creation time
    #[serde(default)]
    pub order_date: Option<Timestamp>,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 64))]
    pub table_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<Timestamp>,
}
