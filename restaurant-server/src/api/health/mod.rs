//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 存储可用性检查 |
//!
//! ```json
//! { "status": "healthy", "version": "0.1.0", "uptime_seconds": 12, "database": "ok" }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use std::time::Instant;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// healthy | degraded
    status: &'static str,
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    /// ok | error
    database: &'static str,
    /// 数据库检查延迟 (毫秒)
    latency_ms: u64,
}

// 服务器启动时间
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Record the process start; later calls keep the first value
pub fn mark_started() {
    START_TIME.get_or_init(Instant::now);
}

fn uptime_seconds() -> u64 {
    START_TIME.get_or_init(Instant::now).elapsed().as_secs()
}

/// 健康检查: 数据库不可用时返回 503
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let started = Instant::now();
    let db_ok = state.db.ping().await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let status = if db_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if db_ok { "healthy" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds: uptime_seconds(),
            database: if db_ok { "ok" } else { "error" },
            latency_ms,
        }),
    )
}
