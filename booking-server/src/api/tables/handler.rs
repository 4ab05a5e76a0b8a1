//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};

use crate::core::ServerState;
use crate::utils::time::today;
use crate::utils::{ApiResponse, AppResult};

/// GET /api/restaurants/:id/tables - 获取门店所有桌台
pub async fn list(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<i64>,
) -> AppResult<ApiResponse<Vec<DiningTable>>> {
    let tables = state.tables.list_tables(restaurant_id).await?;
    Ok(ApiResponse::success(tables))
}

/// POST /api/restaurants/:id/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<i64>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<ApiResponse<DiningTable>> {
    let table = state.tables.create_table(restaurant_id, payload).await?;
    Ok(ApiResponse::success(table))
}

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<DiningTable>> {
    let table = state.tables.get_table(id).await?;
    Ok(ApiResponse::success(table))
}

/// PUT /api/tables/:id - 更新桌台
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<ApiResponse<DiningTable>> {
    let table = state.tables.update_table(id, payload).await?;
    Ok(ApiResponse::success(table))
}

/// DELETE /api/tables/:id - 删除桌台 (有未来预订时拒绝)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    state.tables.delete_table(id, today()).await?;
    Ok(ApiResponse::ok())
}
