//! Repository Module
//!
//! CRUD operations over the SurrealDB tables. Every entity is stored under
//! `table:<business key>`, so point lookups go straight to the record id.

// Catalog
pub mod food;
pub mod menu;

// Location
pub mod dining_table;

// Orders
pub mod order;
pub mod order_item;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use food::FoodRepository;
pub use menu::MenuRepository;
pub use order::OrderRepository;
pub use order_item::OrderItemRepository;

use std::future::IntoFuture;
use std::time::Duration;

use shared::PaginationQuery;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

use crate::db::DbService;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced document (menu, table) does not exist
    #[error("Referenced {0} was not found")]
    Reference(String),

    /// The store did not answer within the operation timeout
    #[error("Timed out: {0}")]
    Timeout(String),

    /// A value could not be encoded for the store
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// 业务主键 (food_id, menu_id, ...) 同时作为 SurrealDB 记录 key:
//   - 创建: RecordId::from_table_key("food", food_id)
//   - 读取: db.select(record_id)
//   - 内部 id 字段从不返回给客户端

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
    op_timeout: Duration,
}

impl BaseRepository {
    pub fn new(service: DbService) -> Self {
        Self {
            db: service.db,
            op_timeout: service.op_timeout,
        }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Record id for a business key
    pub fn thing(table: &str, key: &str) -> RecordId {
        RecordId::from_table_key(table, key)
    }

    /// Await a store operation, abandoning it after the operation timeout
    pub async fn run<F, T>(&self, op: &str, fut: F) -> RepoResult<T>
    where
        F: IntoFuture<Output = Result<T, surrealdb::Error>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result.map_err(RepoError::from),
            Err(_) => {
                tracing::warn!(
                    op,
                    timeout_ms = self.op_timeout.as_millis() as u64,
                    "Store operation timed out"
                );
                Err(RepoError::Timeout(op.to_string()))
            }
        }
    }

    /// Page of documents from `table`, oldest first
    pub async fn list<T>(&self, table: &str, page: &PaginationQuery) -> RepoResult<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let sql = format!("SELECT * FROM {table} ORDER BY created_at ASC LIMIT $limit START $start");
        let mut result = self
            .run(
                "list",
                self.db
                    .query(sql)
                    .bind(("limit", page.limit()))
                    .bind(("start", page.offset())),
            )
            .await?;
        let items: Vec<T> = result.take(0)?;
        Ok(items)
    }

    /// Number of documents in `table`
    pub async fn count(&self, table: &str) -> RepoResult<u64> {
        let sql = format!("SELECT count() FROM {table} GROUP ALL");
        let mut result = self.run("count", self.db.query(sql)).await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0).max(0) as u64)
    }

    /// Point lookup by business key
    pub async fn find<T>(&self, table: &str, key: &str) -> RepoResult<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        self.run("select", self.db.select(Self::thing(table, key)))
            .await
    }

    /// Whether a document with this business key exists
    pub async fn exists(&self, table: &str, key: &str) -> RepoResult<bool> {
        let mut result = self
            .run(
                "exists",
                self.db
                    .query("SELECT count() FROM $thing GROUP ALL")
                    .bind(("thing", Self::thing(table, key))),
            )
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0) > 0)
    }

    /// Insert a new document under `table:key`
    pub async fn insert<T>(&self, table: &str, key: &str, content: T) -> RepoResult<()>
    where
        T: serde::Serialize + 'static,
    {
        self.run(
            "create",
            self.db
                .query("CREATE $thing CONTENT $data")
                .bind(("thing", Self::thing(table, key)))
                .bind(("data", content)),
        )
        .await?
        .check()?;
        Ok(())
    }
}

/// Dynamic `UPSERT ... SET` builder for partial updates
///
/// Only fields passed to [`Upsert::set`] are written. Every upsert also
/// stamps `updated_at`, stamps `created_at` when the document is new and
/// writes the business key field, so a document created by an upsert is
/// addressable like any other. The statement returns the prior document,
/// which tells whether the key matched in the same round trip.
pub struct Upsert {
    table: &'static str,
    key_field: &'static str,
    key: String,
    set_parts: Vec<String>,
    bindings: Vec<(String, serde_json::Value)>,
}

impl Upsert {
    pub fn new(table: &'static str, key_field: &'static str, key: &str) -> Self {
        Self {
            table,
            key_field,
            key: key.to_string(),
            set_parts: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Write `field` when `value` is present; absent values leave the field untouched
    pub fn set<V: serde::Serialize>(mut self, field: &str, value: Option<V>) -> RepoResult<Self> {
        if let Some(v) = value {
            let json = serde_json::to_value(v)
                .map_err(|e| RepoError::Encoding(format!("{field}: {e}")))?;
            self.set_parts.push(format!("{field} = ${field}"));
            self.bindings.push((field.to_string(), json));
        }
        Ok(self)
    }

    /// Whether any user-supplied field is set
    pub fn is_empty(&self) -> bool {
        self.set_parts.is_empty()
    }

    /// Render the statement
    pub fn sql(&self) -> String {
        let mut parts = self.set_parts.clone();
        parts.push("updated_at = $now".to_string());
        parts.push("created_at = created_at ?? $now".to_string());
        parts.push(format!("{} = $key", self.key_field));
        format!("UPSERT $thing SET {} RETURN BEFORE", parts.join(", "))
    }

    /// Execute against the store, returning whether the document existed before
    pub async fn execute(self, base: &BaseRepository) -> RepoResult<bool> {
        let sql = self.sql();
        tracing::debug!(table = self.table, key = %self.key, query = %sql, "Upsert");

        let mut query = base
            .db()
            .query(sql)
            .bind(("thing", BaseRepository::thing(self.table, &self.key)))
            .bind(("now", shared::util::now_millis()))
            .bind(("key", self.key));
        for binding in self.bindings {
            query = query.bind(binding);
        }
        let mut result = base.run("upsert", query).await?;
        let before: Option<PriorDocument> = result.take(0)?;
        Ok(before.is_some())
    }
}

/// Prior state of an upserted document; only its presence is read
#[derive(serde::Deserialize)]
struct PriorDocument {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_sql_only_sets_present_fields() {
        let upsert = Upsert::new("food", "food_id", "f-1")
            .set("name", None::<String>)
            .unwrap()
            .set("price", Some(3.5))
            .unwrap();
        assert!(!upsert.is_empty());
        assert_eq!(
            upsert.sql(),
            "UPSERT $thing SET price = $price, updated_at = $now, \
             created_at = created_at ?? $now, food_id = $key RETURN BEFORE"
        );
    }

    #[test]
    fn test_upsert_empty_string_is_written() {
        let upsert = Upsert::new("food", "food_id", "f-1")
            .set("name", Some(String::new()))
            .unwrap();
        assert!(upsert.sql().contains("name = $name"));
    }

    #[test]
    fn test_upsert_rejects_unencodable_value() {
        // JSON object keys must be strings
        let value = std::collections::BTreeMap::from([((1, 2), 3)]);
        let result = Upsert::new("food", "food_id", "f-1").set("name", Some(value));
        assert!(matches!(result, Err(RepoError::Encoding(msg)) if msg.starts_with("name")));
    }

    async fn open_store(dir: &tempfile::TempDir, op_timeout: Duration) -> BaseRepository {
        let service = DbService::open(dir.path().join("db"), "test", "test", op_timeout)
            .await
            .unwrap();
        BaseRepository::new(service)
    }

    #[tokio::test]
    async fn test_slow_store_operation_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let base = open_store(&dir, Duration::from_millis(50)).await;

        let result = base.run("sleep", base.db().query("SLEEP 2s")).await;
        assert!(matches!(result, Err(RepoError::Timeout(op)) if op == "sleep"));
    }

    #[tokio::test]
    async fn test_upsert_reports_prior_document() {
        let dir = tempfile::tempdir().unwrap();
        let base = open_store(&dir, Duration::from_secs(30)).await;

        let existed = Upsert::new("menu", "menu_id", "m-1")
            .set("name", Some("Lunch"))
            .unwrap()
            .execute(&base)
            .await
            .unwrap();
        assert!(!existed);

        let existed = Upsert::new("menu", "menu_id", "m-1")
            .set("category", Some("Main"))
            .unwrap()
            .execute(&base)
            .await
            .unwrap();
        assert!(existed);

        #[derive(serde::Deserialize)]
        struct MenuRow {
            name: String,
            category: String,
            menu_id: String,
        }
        let doc: MenuRow = base.find("menu", "m-1").await.unwrap().unwrap();
        assert_eq!(doc.name, "Lunch");
        assert_eq!(doc.category, "Main");
        assert_eq!(doc.menu_id, "m-1");
    }

    #[test]
    fn test_upsert_without_fields() {
        let upsert = Upsert::new("menu", "menu_id", "m-1");
        assert!(upsert.is_empty());
        assert!(upsert.sql().starts_with("UPSERT $thing SET updated_at = $now"));
    }
}
