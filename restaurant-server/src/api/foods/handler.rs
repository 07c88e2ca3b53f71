//! Food API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::PaginationQuery;
use shared::models::{Food, FoodCreate, FoodPage, FoodUpdate, InsertOneResult, UpdateResult};

use crate::core::ServerState;
use crate::db::repository::FoodRepository;
use crate::utils::{AppError, AppResult, ErrorCode, ValidatedJson};

/// GET /foods - 分页获取菜品
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<PaginationQuery>,
) -> AppResult<Json<FoodPage>> {
    let repo = FoodRepository::new(state.db.clone());
    let total_count = repo.count().await?;
    let food_items = repo.list(&page).await?;
    Ok(Json(FoodPage {
        total_count,
        food_items,
    }))
}

/// GET /foods/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Food>> {
    let repo = FoodRepository::new(state.db.clone());
    let food = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::FoodNotFound, format!("Food {} not found", id))
    })?;
    Ok(Json(food))
}

/// POST /foods - 创建菜品 (菜单必须存在)
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<FoodCreate>,
) -> AppResult<Json<InsertOneResult>> {
    let repo = FoodRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    tracing::info!(food_id = %result.inserted_id, "Food created");
    Ok(Json(result))
}

/// PATCH /foods/:id - 部分更新菜品 (不存在则创建)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<FoodUpdate>,
) -> AppResult<Json<UpdateResult>> {
    let repo = FoodRepository::new(state.db.clone());
    let result = repo.update(&id, payload).await?;
    Ok(Json(result))
}
