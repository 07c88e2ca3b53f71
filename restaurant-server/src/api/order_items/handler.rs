//! Order Item API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::PaginationQuery;
use shared::models::{
    OrderItem, OrderItemUpdate, OrderSummary, PlaceOrder, PlaceOrderResult, UpdateResult,
};

use crate::core::ServerState;
use crate::db::repository::OrderItemRepository;
use crate::orders::{OrderAggregator, OrderPlacement};
use crate::utils::{AppError, AppResult, ErrorCode, ValidatedJson};

/// GET /orderItems - 获取订单明细列表
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<PaginationQuery>,
) -> AppResult<Json<Vec<OrderItem>>> {
    let repo = OrderItemRepository::new(state.db.clone());
    let items = repo.list(&page).await?;
    Ok(Json(items))
}

/// GET /orderItems/:id - 获取单条订单明细
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderItem>> {
    let repo = OrderItemRepository::new(state.db.clone());
    let item = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::OrderItemNotFound,
            format!("Order item {} not found", id),
        )
    })?;
    Ok(Json(item))
}

/// POST /orderItems - 下单
pub async fn place_order(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<PlaceOrder>,
) -> AppResult<Json<PlaceOrderResult>> {
    let placement = OrderPlacement::new(state.db.clone());
    let result = placement.place(payload).await?;
    Ok(Json(result))
}

/// PATCH /orderItems/:id - 部分更新订单明细
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<OrderItemUpdate>,
) -> AppResult<Json<UpdateResult>> {
    let repo = OrderItemRepository::new(state.db.clone());
    let result = repo.update(&id, payload).await?;
    Ok(Json(result))
}

/// GET /orderItems-order/:order_id - 订单汇总 (无明细时返回空数组)
pub async fn summarize(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Vec<OrderSummary>>> {
    let aggregator = OrderAggregator::new(state.db.clone());
    let summaries = aggregator.summarize(&order_id).await?;
    Ok(Json(summaries))
}
