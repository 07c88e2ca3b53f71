//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::PaginationQuery;
use shared::models::{InsertOneResult, Menu, MenuCreate, MenuUpdate, UpdateResult};

use crate::core::ServerState;
use crate::db::repository::MenuRepository;
use crate::utils::validation::validate_menu_window;
use crate::utils::{AppError, AppResult, ErrorCode, ValidatedJson};

/// GET /menus - 获取菜单列表
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<PaginationQuery>,
) -> AppResult<Json<Vec<Menu>>> {
    let repo = MenuRepository::new(state.db.clone());
    let menus = repo.list(&page).await?;
    Ok(Json(menus))
}

/// GET /menus/:id - 获取单个菜单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Menu>> {
    let repo = MenuRepository::new(state.db.clone());
    let menu = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::MenuNotFound, format!("Menu {} not found", id))
    })?;
    Ok(Json(menu))
}

/// POST /menus - 创建菜单
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<MenuCreate>,
) -> AppResult<Json<InsertOneResult>> {
    validate_menu_window(payload.start_date, payload.end_date)?;

    let repo = MenuRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    tracing::info!(menu_id = %result.inserted_id, "Menu created");
    Ok(Json(result))
}

/// PATCH /menus/:id - 部分更新菜单
///
/// 时间窗口仅在两端同时提供时校验
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<MenuUpdate>,
) -> AppResult<Json<UpdateResult>> {
    validate_menu_window(payload.start_date.flatten(), payload.end_date.flatten())?;

    let repo = MenuRepository::new(state.db.clone());
    let result = repo.update(&id, payload).await?;
    Ok(Json(result))
}
