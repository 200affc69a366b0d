//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`ApiMessage`] - `{"message": "..."}` 响应体
//!
//! # 状态码约定
//!
//! 沿用旧版订单 API 的约定：缺失记录和校验失败一律报 400，
//! 仅表编号冲突报 409，存储故障报 500。
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Order not found"))
//!
//! // 返回成功消息
//! Ok(Json(ApiMessage::new("New order created")))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// API 消息响应体
///
/// ```json
/// { "message": "New order created" }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    /// 消息
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 应用错误枚举
///
/// | 分类 | 状态码 |
/// |------|--------|
/// | 验证失败 (缺失/格式错误字段) | 400 |
/// | 资源不存在 | 400 |
/// | 表编号冲突 | 409 |
/// | 数据库错误 | 500 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Not found: {0}")]
    /// 资源不存在 (400，旧版 API 行为)
    NotFound(String),

    #[error("Conflict: {0}")]
    /// 资源冲突 (409)
    Conflict(String),

    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),

            // 旧版 API 把缺失记录报告为 400 而不是 404
            AppError::NotFound(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),

            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.as_str()),

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
        };

        let body = Json(ApiMessage::new(message));

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}
