//! Availability API Handlers

use axum::extract::{Path, Query, State};
use shared::models::{AvailabilityQuery, DiningTable};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// GET /api/restaurants/:id/availability?date&time&party_size - 查询可用桌台
pub async fn find_available(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<i64>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<ApiResponse<Vec<DiningTable>>> {
    let tables = state
        .availability
        .find_available_tables(restaurant_id, query.date, &query.time, query.party_size)
        .await?;
    Ok(ApiResponse::success(tables))
}
