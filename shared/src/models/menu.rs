//! Menu Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::serde_helpers;
use crate::types::Timestamp;

/// Menu entity (菜单)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
    pub menu_id: String,
    pub name: String,
    pub category: String,
    /// Validity window start (Unix millis)
    pub start_date: Option<Timestamp>,
    /// Validity window end (Unix millis)
    pub end_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
}

/// Update menu payload
///
/// `start_date` / `end_date`: absent = untouched, `null` = cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::double_option"
    )]
    pub start_date: Option<Option<Timestamp>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::double_option"
    )]
    pub end_date: Option<Option<Timestamp>>,
}
