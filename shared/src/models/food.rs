//! Food Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Timestamp;

/// Largest accepted price / unit price
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Food entity (菜品)
///
/// Documents created through an upsert may lack fields, so every field
/// falls back to its default on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Food {
    pub food_id: String,
    pub name: String,
    /// Always stored rounded to 2 decimal places
    pub price: f64,
    pub food_image: String,
    /// Owning menu
    pub menu_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create food payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FoodCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = -MAX_PRICE, max = MAX_PRICE))]
    pub price: f64,
    #[validate(length(min = 1, max = 2048))]
    pub food_image: String,
    #[validate(length(min = 1, max = 64))]
    pub menu_id: String,
}

/// Update food payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FoodUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = -MAX_PRICE, max = MAX_PRICE))]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2048))]
    pub food_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 64))]
    pub menu_id: Option<String>,
}

/// One page of the food listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPage {
    /// Number of food documents in the collection
    pub total_count: u64,
    pub food_items: Vec<Food>,
}
