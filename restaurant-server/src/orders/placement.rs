//! Order placement
//!
//! `POST /orderItems` creates a new order at a table together with all of its
//! items. Every line is checked before anything is written, and the order
//! plus its items go to the store in a single transaction.

use shared::models::food::MAX_PRICE;
use shared::models::{Order, OrderItem, OrderItemInput, PlaceOrder, PlaceOrderResult};
use shared::util::{new_key, now_millis};

use crate::db::DbService;
use crate::db::repository::{DiningTableRepository, OrderItemRepository, RepoError, RepoResult};
use crate::order_money::round_price;

#[derive(Clone)]
pub struct OrderPlacement {
    tables: DiningTableRepository,
    items: OrderItemRepository,
}

impl OrderPlacement {
    pub fn new(db: DbService) -> Self {
        Self {
            tables: DiningTableRepository::new(db.clone()),
            items: OrderItemRepository::new(db),
        }
    }

    /// Place one order at `table_id` holding every requested item
    pub async fn place(&self, request: PlaceOrder) -> RepoResult<PlaceOrderResult> {
        validate_lines(&request.order_items)?;

        if !self.tables.exists(&request.table_id).await? {
            return Err(RepoError::Reference("Table".into()));
        }

        let (order, items) = build_documents(request, now_millis());
        let order_id = order.order_id.clone();
        let written = self.items.create_many(order, items).await?;

        tracing::info!(
            order_id = %order_id,
            items = written.inserted_ids.len(),
            "Order placed"
        );

        Ok(PlaceOrderResult {
            order_id,
            inserted_ids: written.inserted_ids,
        })
    }
}

/// Reject the whole request if any line is unusable
fn validate_lines(lines: &[OrderItemInput]) -> RepoResult<()> {
    if lines.is_empty() {
        return Err(RepoError::Validation("order_items must not be empty".into()));
    }
    for (index, line) in lines.iter().enumerate() {
        if line.food_id.trim().is_empty() {
            return Err(RepoError::Validation(format!(
                "order_items[{index}].food_id must not be empty"
            )));
        }
        if line.quantity < 1 {
            return Err(RepoError::Validation(format!(
                "order_items[{index}].quantity must be at least 1"
            )));
        }
        if !line.unit_price.is_finite() || line.unit_price.abs() > MAX_PRICE {
            return Err(RepoError::Validation(format!(
                "order_items[{index}].unit_price must be a finite number up to {MAX_PRICE}"
            )));
        }
    }
    Ok(())
}

/// New order document plus its items; items share `created_at` and keep
/// their request position in `line_no`
fn build_documents(request: PlaceOrder, now: i64) -> (Order, Vec<OrderItem>) {
    let order = Order {
        order_id: new_key(),
        table_id: request.table_id,
        order_date: now,
        created_at: now,
        updated_at: now,
    };

    let items = request
        .order_items
        .into_iter()
        .enumerate()
        .map(|(line_no, line)| OrderItem {
            order_item_id: new_key(),
            order_id: order.order_id.clone(),
            food_id: line.food_id,
            quantity: line.quantity,
            unit_price: round_price(line.unit_price),
            line_no: line_no as i64,
            created_at: now,
            updated_at: now,
        })
        .collect();

    (order, items)
}
