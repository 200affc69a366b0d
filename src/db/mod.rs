//! Database Module
//!
//! Handles the embedded SurrealDB instance and schema bootstrap

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

/// Schema 定义
///
/// 表编号唯一性由存储层索引保证，写入冲突映射为 409
/// (见 `repository::order`)。
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
DEFINE INDEX IF NOT EXISTS uniq_table_no ON TABLE orders COLUMNS tableNo UNIQUE;
DEFINE TABLE IF NOT EXISTS users SCHEMALESS;
"#;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Create a database service backed by RocksDB at `db_path`
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        let service = Self::bootstrap(db).await?;
        tracing::info!("Database connection established ({db_path})");
        Ok(service)
    }

    /// Create an in-memory database service (tests and demos)
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::bootstrap(db).await
    }

    async fn bootstrap(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns("orderdesk")
            .use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?
            .check()
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        Ok(Self { db })
    }
}
