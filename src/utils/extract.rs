//! JSON 提取器
//!
//! axum 默认的 [`Json`] 提取器在反序列化失败时返回 422，
//! 本 API 约定所有请求体问题一律返回 400 `{"message": ...}`，
//! 所以处理器统一使用 [`AppJson`]。

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::utils::AppError;

/// 请求体 JSON 提取器
///
/// 反序列化失败 (缺失字段、类型不符、非法 JSON) 映射为
/// [`AppError::Validation`] (400)。
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text())),
        }
    }
}
