use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Clone 实现浅拷贝 (Surreal 句柄内部是 Arc)，
/// 每个请求处理器都拿到同一个数据库连接。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试场景配合
    /// [`DbService::memory`] 手动构造。
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据目录 (确保存在)
    /// 2. 数据库 (data_dir/database/orderdesk.db) + schema 定义
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir)?;

        let db_path = db_dir.join("orderdesk.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
