//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) and the entity repositories.

pub mod repository;

use std::path::Path;
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::core::Config;
use crate::utils::AppError;

/// Secondary indexes on the business keys
///
/// Record keys already equal the business keys; these cover the foreign-key
/// style lookups done by the aggregation query.
const INDEX_DEFINITIONS: &str = r#"
    DEFINE INDEX IF NOT EXISTS food_menu ON TABLE food FIELDS menu_id;
    DEFINE INDEX IF NOT EXISTS order_table ON TABLE order FIELDS table_id;
    DEFINE INDEX IF NOT EXISTS order_item_order ON TABLE order_item FIELDS order_id;
    DEFINE INDEX IF NOT EXISTS order_item_food ON TABLE order_item FIELDS food_id;
"#;

/// Database service - owns the store handle and the per-operation timeout
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
    pub op_timeout: Duration,
}

impl DbService {
    /// Open the database under `work_dir/database`
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        Self::open(
            config.database_dir(),
            &config.db_namespace,
            &config.db_name,
            config.store_timeout(),
        )
        .await
    }

    /// Open (or create) a RocksDB-backed database at `path`
    pub async fn open(
        path: impl AsRef<Path>,
        namespace: &str,
        database: &str,
        op_timeout: Duration,
    ) -> Result<Self, AppError> {
        let path = path.as_ref();
        std::fs::create_dir_all(path).map_err(|e| {
            AppError::database(format!("Failed to create database dir {}: {e}", path.display()))
        })?;

        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(INDEX_DEFINITIONS)
            .await
            .and_then(|r| r.check())
            .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?;

        tracing::info!(
            path = %path.display(),
            namespace,
            database,
            timeout_ms = op_timeout.as_millis() as u64,
            "Database connection established (SurrealDB RocksDB)"
        );

        Ok(Self { db, op_timeout })
    }

    /// Liveness probe: one trivial query bounded by the operation timeout
    pub async fn ping(&self) -> bool {
        match tokio::time::timeout(self.op_timeout, self.db.query("RETURN 1")).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Database ping failed");
                false
            }
            Err(_) => {
                tracing::warn!("Database ping timed out");
                false
            }
        }
    }
}
