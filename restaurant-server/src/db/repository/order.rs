//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, Upsert, dining_table};
use crate::db::DbService;
use shared::PaginationQuery;
use shared::models::{InsertOneResult, Order, OrderCreate, OrderUpdate, UpdateResult};
use shared::util::{new_key, now_millis};

pub const ORDER_TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: DbService) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn list(&self, page: &PaginationQuery) -> RepoResult<Vec<Order>> {
        self.base.list(ORDER_TABLE, page).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        self.base.find(ORDER_TABLE, id).await
    }

    /// Create an order at an existing table; `order_date` defaults to now
    pub async fn create(&self, data: OrderCreate) -> RepoResult<InsertOneResult> {
        if !self.base.exists(dining_table::TABLE, &data.table_id).await? {
            return Err(RepoError::Reference("Table".into()));
        }

        let now = now_millis();
        let order = Order {
            order_id: new_key(),
            table_id: data.table_id,
            order_date: data.order_date.unwrap_or(now),
            created_at: now,
            updated_at: now,
        };
        let order_id = order.order_id.clone();
        self.base.insert(ORDER_TABLE, &order_id, order).await?;

        Ok(InsertOneResult {
            inserted_id: order_id,
        })
    }

    /// Partially update an order; moving it to another table re-checks that table
    pub async fn update(&self, id: &str, data: OrderUpdate) -> RepoResult<UpdateResult> {
        if let Some(table_id) = &data.table_id
            && !self.base.exists(dining_table::TABLE, table_id).await?
        {
            return Err(RepoError::Reference("Table".into()));
        }

        let existed = Upsert::new(ORDER_TABLE, "order_id", id)
            .set("table_id", data.table_id)?
            .set("order_date", data.order_date)?
            .execute(&self.base)
            .await?;

        Ok(if existed {
            UpdateResult::matched()
        } else {
            UpdateResult::upserted(id)
        })
    }
}
