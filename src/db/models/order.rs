//! Order Model
//!
//! 订单记录：引用下单员工 (user)，表编号全局唯一

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order entity (订单)
///
/// 数据库和 API 共用同一字段布局，`tableNo` 保持旧版 API 的驼峰命名。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Owning user reference
    #[serde(with = "serde_helpers::record_id")]
    pub user: RecordId,
    #[serde(rename = "tableNo")]
    pub table_no: u32,
    pub ordertext: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Order annotated with the owning user's username (list output)
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithUser {
    #[serde(flatten)]
    pub order: Order,
    /// 用户已被删除时为 null
    pub username: Option<String>,
}

/// Create order payload
///
/// 字段缺省为各自的"假值" (空串 / 0)，处理器用同一个存在性检查
/// 同时覆盖缺失和为空的情况。
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    #[serde(default)]
    pub user: String,
    #[serde(default, rename = "tableNo")]
    pub table_no: u32,
    #[serde(default)]
    pub ordertext: String,
}

/// Update order payload (full replacement)
#[derive(Debug, Clone, Deserialize)]
pub struct OrderUpdate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user: String,
    #[serde(default, rename = "tableNo")]
    pub table_no: u32,
    #[serde(default)]
    pub ordertext: String,
    /// 必须是严格的布尔值，缺失或其他类型在提取器处拒绝
    pub completed: bool,
}

/// Delete order payload
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDelete {
    #[serde(default)]
    pub id: String,
}
