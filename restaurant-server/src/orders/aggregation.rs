//! Order aggregation
//!
//! Joins an order's items with their food, order and table documents and
//! rolls them up into a priced summary.
//!
//! The store does the filtering: one multi-statement request returns the
//! order's items (in arrival order) plus only the food / order / table
//! documents they reference. The join, projection and grouping then run
//! in-process as pure functions.
//!
//! ```text
//! order_item ──food_id──▶ food          (left outer)
//!     │
//!     └──order_id──▶ order ──table_id──▶ dining_table   (left outer)
//! ```

use std::collections::HashMap;

use shared::models::{DiningTable, Food, Order, OrderItem, OrderItemLine, OrderSummary};

use crate::db::DbService;
use crate::db::repository::{BaseRepository, RepoResult};
use crate::order_money::sum_amounts;

/// Items of the order in arrival order, then the documents they reference
const AGGREGATION_QUERY: &str = r#"
    SELECT * FROM order_item WHERE order_id = $order_id ORDER BY created_at ASC, line_no ASC;
    SELECT * FROM food WHERE food_id INSIDE (SELECT VALUE food_id FROM order_item WHERE order_id = $order_id);
    SELECT * FROM order WHERE order_id = $order_id;
    SELECT * FROM dining_table WHERE table_id INSIDE (SELECT VALUE table_id FROM order WHERE order_id = $order_id);
"#;

/// Documents fetched for one aggregation
#[derive(Debug, Default)]
pub struct AggregationInput {
    pub items: Vec<OrderItem>,
    pub foods: Vec<Food>,
    pub orders: Vec<Order>,
    pub tables: Vec<DiningTable>,
}

/// An item with its (possibly missing) joined documents
#[derive(Debug)]
struct JoinedRow<'a> {
    item: &'a OrderItem,
    food: Option<&'a Food>,
    order: Option<&'a Order>,
    table: Option<&'a DiningTable>,
}

/// Grouping key: `(order_id, table_id, table_number)`
type GroupKey = (Option<String>, Option<String>, Option<i64>);

#[derive(Clone)]
pub struct OrderAggregator {
    base: BaseRepository,
}

impl OrderAggregator {
    pub fn new(db: DbService) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Priced summary of `order_id`; empty when the order has no items
    pub async fn summarize(&self, order_id: &str) -> RepoResult<Vec<OrderSummary>> {
        let input = self.fetch(order_id).await?;
        let summaries = aggregate(&input);
        tracing::debug!(
            order_id,
            items = input.items.len(),
            groups = summaries.len(),
            "Order aggregated"
        );
        Ok(summaries)
    }

    /// One store round-trip for everything the pipeline needs
    async fn fetch(&self, order_id: &str) -> RepoResult<AggregationInput> {
        let mut result = self
            .base
            .run(
                "aggregate order",
                self.base
                    .db()
                    .query(AGGREGATION_QUERY)
                    .bind(("order_id", order_id.to_string())),
            )
            .await?;

        Ok(AggregationInput {
            items: result.take(0)?,
            foods: result.take(1)?,
            orders: result.take(2)?,
            tables: result.take(3)?,
        })
    }
}

/// Run the join / project / group pipeline over fetched documents
pub fn aggregate(input: &AggregationInput) -> Vec<OrderSummary> {
    let rows = join(input);
    let lines: Vec<OrderItemLine> = rows.iter().map(project).collect();
    group(lines)
}

/// Left-outer joins: item → food, item → order, order → table.
/// Every item yields exactly one row.
fn join(input: &AggregationInput) -> Vec<JoinedRow<'_>> {
    let foods: HashMap<&str, &Food> = input
        .foods
        .iter()
        .map(|f| (f.food_id.as_str(), f))
        .collect();
    let orders: HashMap<&str, &Order> = input
        .orders
        .iter()
        .map(|o| (o.order_id.as_str(), o))
        .collect();
    let tables: HashMap<&str, &DiningTable> = input
        .tables
        .iter()
        .map(|t| (t.table_id.as_str(), t))
        .collect();

    input
        .items
        .iter()
        .map(|item| {
            let food = foods.get(item.food_id.as_str()).copied();
            let order = orders.get(item.order_id.as_str()).copied();
            let table = order.and_then(|o| tables.get(o.table_id.as_str()).copied());
            JoinedRow {
                item,
                food,
                order,
                table,
            }
        })
        .collect()
}

fn project(row: &JoinedRow<'_>) -> OrderItemLine {
    let amount = row.food.map(|f| f.price);
    OrderItemLine {
        amount,
        food_name: row.food.map(|f| f.name.clone()),
        food_image: row.food.map(|f| f.food_image.clone()),
        table_number: row.table.map(|t| t.table_number),
        table_id: row.table.map(|t| t.table_id.clone()),
        order_id: row.order.map(|o| o.order_id.clone()),
        price: amount,
        quantity: row.item.quantity,
    }
}

/// Group lines by `(order_id, table_id, table_number)`, keeping the order
/// in which groups and lines first appear.
fn group(lines: Vec<OrderItemLine>) -> Vec<OrderSummary> {
    let mut keys: Vec<GroupKey> = Vec::new();
    let mut groups: HashMap<GroupKey, Vec<OrderItemLine>> = HashMap::new();

    for line in lines {
        let key = (
            line.order_id.clone(),
            line.table_id.clone(),
            line.table_number,
        );
        groups
            .entry(key.clone())
            .or_insert_with(|| {
                keys.push(key);
                Vec::new()
            })
            .push(line);
    }

    keys.into_iter()
        .filter_map(|key| {
            let table_number = key.2;
            groups.remove(&key).map(|order_items| OrderSummary {
                payment_due: sum_amounts(order_items.iter().map(|l| l.amount)),
                total_count: order_items.len() as u64,
                table_number,
                order_items,
            })
        })
        .collect()
}
