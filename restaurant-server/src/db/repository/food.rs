//! Food Repository

use super::{BaseRepository, RepoError, RepoResult, Upsert, menu::MENU_TABLE};
use crate::db::DbService;
use crate::order_money::round_price;
use shared::PaginationQuery;
use shared::models::{Food, FoodCreate, FoodUpdate, InsertOneResult, UpdateResult};
use shared::util::{new_key, now_millis};

pub const FOOD_TABLE: &str = "food";

#[derive(Clone)]
pub struct FoodRepository {
    base: BaseRepository,
}

impl FoodRepository {
    pub fn new(db: DbService) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// One page of food, oldest first
    pub async fn list(&self, page: &PaginationQuery) -> RepoResult<Vec<Food>> {
        self.base.list(FOOD_TABLE, page).await
    }

    /// Total number of food documents
    pub async fn count(&self) -> RepoResult<u64> {
        self.base.count(FOOD_TABLE).await
    }

    /// Find food by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Food>> {
        self.base.find(FOOD_TABLE, id).await
    }

    /// Create a new food; the menu must exist
    pub async fn create(&self, data: FoodCreate) -> RepoResult<InsertOneResult> {
        if !self.base.exists(MENU_TABLE, &data.menu_id).await? {
            return Err(RepoError::Reference("Menu".into()));
        }

        let now = now_millis();
        let food = Food {
            food_id: new_key(),
            name: data.name,
            price: round_price(data.price),
            food_image: data.food_image,
            menu_id: data.menu_id,
            created_at: now,
            updated_at: now,
        };
        let food_id = food.food_id.clone();
        self.base.insert(FOOD_TABLE, &food_id, food).await?;

        Ok(InsertOneResult {
            inserted_id: food_id,
        })
    }

    /// Partially update a food, creating it when absent
    pub async fn update(&self, id: &str, data: FoodUpdate) -> RepoResult<UpdateResult> {
        if let Some(menu_id) = &data.menu_id
            && !self.base.exists(MENU_TABLE, menu_id).await?
        {
            return Err(RepoError::Reference("Menu".into()));
        }

        let existed = Upsert::new(FOOD_TABLE, "food_id", id)
            .set("name", data.name)?
            .set("price", data.price.map(round_price))?
            .set("food_image", data.food_image)?
            .set("menu_id", data.menu_id)?
            .execute(&self.base)
            .await?;

        Ok(if existed {
            UpdateResult::matched()
        } else {
            UpdateResult::upserted(id)
        })
    }
}
