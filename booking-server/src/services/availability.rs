//! Availability Engine
//!
//! Read-only: answers which tables can seat a party at a slot. The answer is
//! advisory; the booking write path re-checks the one table it targets.

use std::collections::HashSet;

use chrono::NaiveDate;
use shared::error::ErrorCode;
use shared::models::DiningTable;
use sqlx::SqlitePool;

use crate::db::repository::{dining_table, reservation, restaurant};
use crate::services::error::{ServiceError, ServiceResult};
use crate::utils::time::normalize_slot;

#[derive(Clone, Debug)]
pub struct AvailabilityEngine {
    pool: SqlitePool,
}

impl AvailabilityEngine {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Enabled tables with capacity ≥ `party_size` and no pending/confirmed
    /// reservation at (`date`, `time`), smallest capacity first.
    ///
    /// An empty list is a normal answer.
    pub async fn find_available_tables(
        &self,
        restaurant_id: i64,
        date: NaiveDate,
        time: &str,
        party_size: i32,
    ) -> ServiceResult<Vec<DiningTable>> {
        if party_size <= 0 {
            return Err(ServiceError::validation(
                ErrorCode::ValueOutOfRange,
                format!("party_size must be positive, got {party_size}"),
            ));
        }
        let slot = normalize_slot(time)?;

        if !restaurant::exists(&self.pool, restaurant_id).await? {
            return Err(ServiceError::not_found(
                ErrorCode::RestaurantNotFound,
                format!("Restaurant {restaurant_id} not found"),
            ));
        }

        let candidates = dining_table::find_candidates(&self.pool, restaurant_id, party_size).await?;
        let held: HashSet<i64> =
            reservation::find_held_table_ids(&self.pool, restaurant_id, date, &slot)
                .await?
                .into_iter()
                .collect();

        let available: Vec<DiningTable> = candidates
            .into_iter()
            .filter(|t| !held.contains(&t.id))
            .collect();

        tracing::debug!(
            restaurant_id,
            %date,
            time = %slot,
            party_size,
            held = held.len(),
            available = available.len(),
            "Availability computed"
        );
        Ok(available)
    }
}
