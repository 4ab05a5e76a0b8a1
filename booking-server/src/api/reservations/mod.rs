//! Reservation API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/reservations | POST | 创建预订 (pending) |
//! | /api/reservations/{id} | GET / PUT | 查询 / 修改预订 |
//! | /api/reservations/{id}/status | PUT | 状态流转 |
//! | /api/reservations/{id}/cancel | POST | 取消预订 |
//! | /api/restaurants/{id}/reservations | GET | 门店预订列表 |
//! | /api/users/{id}/reservations | GET | 用户预订列表 |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/reservations", routes())
        .route(
            "/api/restaurants/{id}/reservations",
            get(handler::list_by_restaurant),
        )
        .route("/api/users/{id}/reservations", get(handler::list_by_user))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/status", put(handler::set_status))
        .route("/{id}/cancel", post(handler::cancel))
}
