//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::PaginationQuery;
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, InsertOneResult, UpdateResult,
};

use crate::core::ServerState;
use crate::db::repository::DiningTableRepository;
use crate::utils::{AppError, AppResult, ErrorCode, ValidatedJson};

/// GET /tables - 获取桌台列表
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<PaginationQuery>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let tables = repo.list(&page).await?;
    Ok(Json(tables))
}

/// GET /tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::TableNotFound, format!("Table {} not found", id))
    })?;
    Ok(Json(table))
}

/// POST /tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<DiningTableCreate>,
) -> AppResult<Json<InsertOneResult>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    tracing::info!(table_id = %result.inserted_id, "Table created");
    Ok(Json(result))
}

/// PATCH /tables/:id - 部分更新桌台
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<DiningTableUpdate>,
) -> AppResult<Json<UpdateResult>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let result = repo.update(&id, payload).await?;
    Ok(Json(result))
}
