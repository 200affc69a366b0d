//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型
//! - [`AppJson`] - JSON 提取器 (反序列化失败返回 400)
//! - 日志等工具

pub mod error;
pub mod extract;
pub mod logger;
pub mod result;

pub use error::{ApiMessage, AppError};
pub use extract::AppJson;
pub use result::AppResult;
