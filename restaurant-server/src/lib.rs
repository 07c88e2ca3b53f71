//! Restaurant Server - 餐厅管理后端
//!
//! # 架构概述
//!
//! 基于嵌入式 SurrealDB 的 CRUD 服务，核心是订单汇总：把订单明细与菜品、
//! 订单、桌台关联后按订单汇总应付金额。
//!
//! # 模块结构
//!
//! ```text
//! restaurant-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (DbService + repositories)
//! ├── orders/        # 订单汇总、下单
//! ├── order_money/   # 金额计算 (rust_decimal)
//! └── utils/         # 错误桥接、日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod order_money;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use orders::{OrderAggregator, OrderPlacement};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 .env, 初始化日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json || config.is_production()),
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____            __                              __
   / __ \___  _____/ /_____ ___  ___________ _____ / /_
  / /_/ / _ \/ ___/ __/ __ `/ / / / ___/ __ `/ __ \/ __/
 / _, _/  __(__  ) /_/ /_/ / /_/ / /  / /_/ / / / / /_
/_/ |_|\___/____/\__/\__,_/\__,_/_/   \__,_/_/ /_/\__/
    "#
    );
}
