//! Order Item API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /orderItems | GET | 订单明细列表 |
//! | /orderItems | POST | 下单 (订单 + 全部明细, 单事务) |
//! | /orderItems/{id} | GET / PATCH | 单条明细 |
//! | /orderItems-order/{order_id} | GET | 订单汇总 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/orderItems", routes())
        .route("/orderItems-order/{order_id}", get(handler::summarize))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::place_order))
        .route("/{id}", get(handler::get_by_id).patch(handler::update))
}
