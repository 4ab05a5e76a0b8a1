//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Restaurant, RestaurantCreate};

use crate::core::ServerState;
use crate::db::repository::restaurant;
use crate::services::ServiceError;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// POST /api/restaurants - 创建门店
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<ApiResponse<Restaurant>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    let created = restaurant::create(&state.pool, payload)
        .await
        .map_err(ServiceError::from)?;
    tracing::info!(restaurant_id = created.id, name = %created.name, "Restaurant created");
    Ok(ApiResponse::success(created))
}

/// GET /api/restaurants/:id - 获取门店
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Restaurant>> {
    let found = restaurant::find_by_id(&state.pool, id)
        .await
        .map_err(ServiceError::from)?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::RestaurantNotFound, format!("Restaurant {id} not found"))
        })?;
    Ok(ApiResponse::success(found))
}
