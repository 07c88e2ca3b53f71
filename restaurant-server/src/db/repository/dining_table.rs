//! Dining Table Repository

use super::{BaseRepository, RepoResult, Upsert};
use crate::db::DbService;
use shared::PaginationQuery;
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, InsertOneResult, UpdateResult,
};
use shared::util::{new_key, now_millis};

pub const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: DbService) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn list(&self, page: &PaginationQuery) -> RepoResult<Vec<DiningTable>> {
        self.base.list(TABLE, page).await
    }

    /// Find table by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        self.base.find(TABLE, id).await
    }

    pub async fn exists(&self, id: &str) -> RepoResult<bool> {
        self.base.exists(TABLE, id).await
    }

    /// Create a new dining table
    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<InsertOneResult> {
        let now = now_millis();
        let table = DiningTable {
            table_id: new_key(),
            table_number: data.table_number,
            number_of_guests: data.number_of_guests,
            created_at: now,
            updated_at: now,
        };
        let table_id = table.table_id.clone();
        self.base.insert(TABLE, &table_id, table).await?;

        Ok(InsertOneResult {
            inserted_id: table_id,
        })
    }

    /// Partially update a dining table, creating it when absent
    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<UpdateResult> {
        let existed = Upsert::new(TABLE, "table_id", id)
            .set("table_number", data.table_number)?
            .set("number_of_guests", data.number_of_guests)?
            .execute(&self.base)
            .await?;

        Ok(if existed {
            UpdateResult::matched()
        } else {
            UpdateResult::upserted(id)
        })
    }
}
