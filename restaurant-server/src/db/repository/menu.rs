//! Menu Repository

use super::{BaseRepository, RepoResult, Upsert};
use crate::db::DbService;
use shared::PaginationQuery;
use shared::models::{InsertOneResult, Menu, MenuCreate, MenuUpdate, UpdateResult};
use shared::util::{new_key, now_millis};

pub const MENU_TABLE: &str = "menu";

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: DbService) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn list(&self, page: &PaginationQuery) -> RepoResult<Vec<Menu>> {
        self.base.list(MENU_TABLE, page).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Menu>> {
        self.base.find(MENU_TABLE, id).await
    }

    /// Create a new menu (window already validated by the caller)
    pub async fn create(&self, data: MenuCreate) -> RepoResult<InsertOneResult> {
        let now = now_millis();
        let menu = Menu {
            menu_id: new_key(),
            name: data.name,
            category: data.category,
            start_date: data.start_date,
            end_date: data.end_date,
            created_at: now,
            updated_at: now,
        };
        let menu_id = menu.menu_id.clone();
        self.base.insert(MENU_TABLE, &menu_id, menu).await?;

        Ok(InsertOneResult {
            inserted_id: menu_id,
        })
    }

    /// Partially update a menu, creating it when absent.
    /// `Some(None)` on a date clears it.
    pub async fn update(&self, id: &str, data: MenuUpdate) -> RepoResult<UpdateResult> {
        let existed = Upsert::new(MENU_TABLE, "menu_id", id)
            .set("name", data.name)?
            .set("category", data.category)?
            .set("start_date", data.start_date)?
            .set("end_date", data.end_date)?
            .execute(&self.base)
            .await?;

        Ok(if existed {
            UpdateResult::matched()
        } else {
            UpdateResult::upserted(id)
        })
    }
}
