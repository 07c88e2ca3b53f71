//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::PaginationQuery;
use shared::models::{InsertOneResult, Order, OrderCreate, OrderUpdate, UpdateResult};

use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResult, ErrorCode, ValidatedJson};

/// GET /orders - 获取订单列表
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<PaginationQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.list(&page).await?;
    Ok(Json(orders))
}

/// GET /orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id))
    })?;
    Ok(Json(order))
}

/// POST /orders - 创建订单 (桌台必须存在)
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<OrderCreate>,
) -> AppResult<Json<InsertOneResult>> {
    let repo = OrderRepository::new(state.db.clone());
    let result = repo.create(payload).await?;
    tracing::info!(order_id = %result.inserted_id, "Order created");
    Ok(Json(result))
}

/// PATCH /orders/:id - 部分更新订单 (换桌)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<OrderUpdate>,
) -> AppResult<Json<UpdateResult>> {
    let repo = OrderRepository::new(state.db.clone());
    let result = repo.update(&id, payload).await?;
    Ok(Json(result))
}
