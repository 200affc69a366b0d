//! Order API Handlers

use std::collections::HashSet;

use axum::{Json, extract::State, http::StatusCode};
use surrealdb::RecordId;

use crate::core::ServerState;
use crate::db::models::{OrderCreate, OrderDelete, OrderUpdate, OrderWithUser};
use crate::db::repository::{OrderRepository, UserRepository};
use crate::utils::{ApiMessage, AppError, AppJson, AppResult};

/// GET /orders - 获取所有订单 (附带下单用户名)
///
/// 旧版行为：空结果报 400 而不是返回空数组。
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderWithUser>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_all().await?;

    if orders.is_empty() {
        return Err(AppError::not_found("No orders found"));
    }

    // 批量取用户名：一次查询覆盖所有引用的 user id
    let mut seen = HashSet::new();
    let user_ids: Vec<RecordId> = orders
        .iter()
        .map(|o| o.user.clone())
        .filter(|id| seen.insert(id.to_string()))
        .collect();

    let usernames = UserRepository::new(state.db.clone())
        .find_usernames(user_ids)
        .await?;

    let enriched = orders
        .into_iter()
        .map(|order| {
            let username = usernames.get(&order.user.to_string()).cloned();
            OrderWithUser { order, username }
        })
        .collect();

    Ok(Json(enriched))
}

/// POST /orders - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> AppResult<(StatusCode, Json<ApiMessage>)> {
    // 存在性检查 (假值检查：空串和 0 一律拒绝)
    if payload.user.is_empty() || payload.table_no == 0 || payload.ordertext.is_empty() {
        return Err(AppError::validation("All fields are required"));
    }

    let repo = OrderRepository::new(state.db.clone());
    match repo.create(payload).await? {
        Some(_) => Ok((
            StatusCode::CREATED,
            Json(ApiMessage::new("New order created")),
        )),
        None => Err(AppError::validation("Invalid order data received")),
    }
}

/// PATCH /orders - 更新订单 (四个可变字段整体替换)
pub async fn update(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderUpdate>,
) -> AppResult<Json<String>> {
    if payload.id.is_empty()
        || payload.user.is_empty()
        || payload.table_no == 0
        || payload.ordertext.is_empty()
    {
        return Err(AppError::validation("All fields are required"));
    }

    let repo = OrderRepository::new(state.db.clone());
    let updated = repo.update(payload).await?;

    Ok(Json(format!("'{}' updated", updated.table_no)))
}

/// DELETE /orders - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderDelete>,
) -> AppResult<Json<String>> {
    if payload.id.is_empty() {
        return Err(AppError::validation("Order ID required"));
    }

    let repo = OrderRepository::new(state.db.clone());
    let deleted = repo
        .delete(&payload.id)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    let id = deleted
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| payload.id.clone());

    Ok(Json(format!(
        "Order '{}' with ID {} deleted",
        deleted.table_no, id
    )))
}
