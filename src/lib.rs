//! Order Desk Server - 餐厅点单管理服务
//!
//! # 架构概述
//!
//! 一个小型 HTTP 服务，管理餐厅订单 (orders) 资源：
//!
//! - **HTTP API** (`api`): RESTful 订单接口 + 健康检查
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (orders / users 集合)
//! - **核心** (`core`): 配置、状态、服务器
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (模型 + 仓储)
//! └── utils/         # 错误类型、日志等工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

/// Load `.env` and initialize logging. Call once at process start.
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        log_dir.as_deref(),
    );
}
