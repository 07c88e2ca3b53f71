//! Write acknowledgments returned by create / update endpoints

use serde::{Deserialize, Serialize};

/// Result of inserting a single document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOneResult {
    pub inserted_id: String,
}

/// Result of inserting several documents in one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertManyResult {
    pub inserted_ids: Vec<String>,
}

/// Result of an update with upsert semantics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
    /// Set when the update created the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

impl UpdateResult {
    pub fn matched() -> Self {
        Self {
            matched_count: 1,
            modified_count: 1,
            upserted_id: None,
        }
    }

    pub fn upserted(id: impl Into<String>) -> Self {
        Self {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id.into()),
        }
    }
}

/// Result of placing an order: the new order and its items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrderResult {
    pub order_id: String,
    pub inserted_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_result_serialize() {
        let json = serde_json::to_value(UpdateResult::matched()).unwrap();
        assert_eq!(json["matched_count"], 1);
        assert!(json.get("upserted_id").is_none());

        let json = serde_json::to_value(UpdateResult::upserted("f-9")).unwrap();
        assert_eq!(json["matched_count"], 0);
        assert_eq!(json["upserted_id"], "f-9");
    }
}
