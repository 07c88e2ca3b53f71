//! Order Item Repository

use super::{BaseRepository, RepoResult, Upsert, order::ORDER_TABLE};
use crate::db::DbService;
use crate::order_money::round_price;
use shared::PaginationQuery;
use shared::models::{InsertManyResult, Order, OrderItem, OrderItemUpdate, UpdateResult};

pub const ORDER_ITEM_TABLE: &str = "order_item";

#[derive(Clone)]
pub struct OrderItemRepository {
    base: BaseRepository,
}

impl OrderItemRepository {
    pub fn new(db: DbService) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn list(&self, page: &PaginationQuery) -> RepoResult<Vec<OrderItem>> {
        self.base.list(ORDER_ITEM_TABLE, page).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<OrderItem>> {
        self.base.find(ORDER_ITEM_TABLE, id).await
    }

    /// Insert an order together with its items in one transaction.
    ///
    /// Either the order and every item are written, or nothing is.
    pub async fn create_many(
        &self,
        order: Order,
        items: Vec<OrderItem>,
    ) -> RepoResult<InsertManyResult> {
        let mut sql = String::from("BEGIN TRANSACTION;\nCREATE $order_thing CONTENT $order;\n");
        for i in 0..items.len() {
            sql.push_str(&format!("CREATE $item_thing_{i} CONTENT $item_{i};\n"));
        }
        sql.push_str("COMMIT TRANSACTION;");

        let inserted_ids: Vec<String> = items.iter().map(|i| i.order_item_id.clone()).collect();

        let mut query = self
            .base
            .db()
            .query(sql)
            .bind((
                "order_thing",
                BaseRepository::thing(ORDER_TABLE, &order.order_id),
            ))
            .bind(("order", order));
        for (i, item) in items.into_iter().enumerate() {
            query = query
                .bind((
                    format!("item_thing_{i}"),
                    BaseRepository::thing(ORDER_ITEM_TABLE, &item.order_item_id),
                ))
                .bind((format!("item_{i}"), item));
        }

        self.base.run("create order items", query).await?.check()?;

        Ok(InsertManyResult { inserted_ids })
    }

    /// Partially update an order item, creating it when absent
    pub async fn update(&self, id: &str, data: OrderItemUpdate) -> RepoResult<UpdateResult> {
        let existed = Upsert::new(ORDER_ITEM_TABLE, "order_item_id", id)
            .set("unit_price", data.unit_price.map(round_price))?
            .set("quantity", data.quantity)?
            .set("food_id", data.food_id)?
            .execute(&self.base)
            .await?;

        Ok(if existed {
            UpdateResult::matched()
        } else {
            UpdateResult::upserted(id)
        })
    }
}
