//! Dining Table Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Timestamp;

/// Dining table entity (桌台)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiningTable {
    pub table_id: String,
    pub table_number: i64,
    /// Guest capacity
    pub number_of_guests: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableCreate {
    #[validate(range(min = 1))]
    pub table_number: i64,
    #[validate(range(min = 1, max = 1000))]
    pub number_of_guests: i64,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DiningTableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub table_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 1000))]
    pub number_of_guests: Option<i64>,
}
