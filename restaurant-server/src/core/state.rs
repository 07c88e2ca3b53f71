use crate::core::{Config, Result, ServerError};
use crate::db::DbService;

/// 服务器状态 - 持有所有请求共享的只读资源
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | 嵌入式数据库 + 操作超时 |
///
/// Repositories are built per request from `db`:
///
/// ```ignore
/// let repo = FoodRepository::new(state.db.clone());
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 1. 工作目录 (确保存在)
    /// 2. 数据库 (work_dir/database)
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(|e| {
            ServerError::Config(format!("Cannot create work dir {}: {e}", config.work_dir))
        })?;

        let db = DbService::new(config).await?;
        Ok(Self::new(config.clone(), db))
    }
}
