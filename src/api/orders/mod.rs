//! Order API 模块
//!
//! 旧版订单 API 的路径约定：四个动词都挂在 `/orders`，
//! update/delete 通过请求体里的 id 寻址，而不是路径参数。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/orders",
        get(handler::list)
            .post(handler::create)
            .patch(handler::update)
            .delete(handler::delete),
    )
}
