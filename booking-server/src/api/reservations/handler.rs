//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{
    Reservation, ReservationCreate, ReservationFilter, ReservationStatusUpdate, ReservationUpdate,
};

use crate::core::ServerState;
use crate::utils::time::today;
use crate::utils::{ApiResponse, AppResult};

/// POST /api/reservations - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<ApiResponse<Reservation>> {
    let reservation = state.booking.create_reservation(payload, today()).await?;
    Ok(ApiResponse::success(reservation))
}

/// GET /api/reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Reservation>> {
    let reservation = state.booking.get_reservation(id).await?;
    Ok(ApiResponse::success(reservation))
}

/// PUT /api/reservations/:id - 修改预订 (仅 pending / confirmed)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<ApiResponse<Reservation>> {
    let reservation = state
        .booking
        .update_reservation(id, payload, today())
        .await?;
    Ok(ApiResponse::success(reservation))
}

/// PUT /api/reservations/:id/status - 状态流转
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationStatusUpdate>,
) -> AppResult<ApiResponse<Reservation>> {
    let reservation = state.booking.set_status(id, payload.status).await?;
    Ok(ApiResponse::success(reservation))
}

/// POST /api/reservations/:id/cancel - 取消预订
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Reservation>> {
    let reservation = state.booking.cancel_reservation(id).await?;
    Ok(ApiResponse::success(reservation))
}

/// GET /api/restaurants/:id/reservations?status&date_from&date_to - 门店预订列表
pub async fn list_by_restaurant(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<i64>,
    Query(filter): Query<ReservationFilter>,
) -> AppResult<ApiResponse<Vec<Reservation>>> {
    let reservations = state
        .booking
        .list_by_restaurant(restaurant_id, &filter)
        .await?;
    Ok(ApiResponse::success(reservations))
}

/// GET /api/users/:id/reservations - 用户预订列表
pub async fn list_by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i64>,
) -> AppResult<ApiResponse<Vec<Reservation>>> {
    let reservations = state.booking.list_by_user(user_id).await?;
    Ok(ApiResponse::success(reservations))
}
