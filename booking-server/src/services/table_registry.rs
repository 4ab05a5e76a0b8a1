//! Table Registry (桌台登记)
//!
//! Owns the physical tables of each restaurant: numbering, capacity and the
//! enabled flag. Deletion is refused while live future reservations still
//! point at a table.

use chrono::NaiveDate;
use shared::error::ErrorCode;
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, dining_table, reservation, restaurant};
use crate::services::error::{ServiceError, ServiceResult};
use crate::utils::validation::validate_positive;

#[derive(Clone, Debug)]
pub struct TableRegistry {
    pool: SqlitePool,
}

impl TableRegistry {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_table(
        &self,
        restaurant_id: i64,
        data: DiningTableCreate,
    ) -> ServiceResult<DiningTable> {
        validate_positive(data.table_number, "table_number")?;
        validate_positive(data.capacity, "capacity")?;
        self.ensure_restaurant(restaurant_id).await?;

        let table = dining_table::create(&self.pool, restaurant_id, &data)
            .await
            .map_err(number_conflict)?;

        tracing::info!(
            restaurant_id,
            table_id = table.id,
            table_number = table.table_number,
            capacity = table.capacity,
            "Dining table created"
        );
        Ok(table)
    }

    /// Tables of a restaurant by table number, disabled ones included
    pub async fn list_tables(&self, restaurant_id: i64) -> ServiceResult<Vec<DiningTable>> {
        self.ensure_restaurant(restaurant_id).await?;
        Ok(dining_table::find_by_restaurant(&self.pool, restaurant_id).await?)
    }

    pub async fn get_table(&self, table_id: i64) -> ServiceResult<DiningTable> {
        dining_table::find_by_id(&self.pool, table_id)
            .await?
            .ok_or_else(|| table_not_found(table_id))
    }

    pub async fn update_table(
        &self,
        table_id: i64,
        patch: DiningTableUpdate,
    ) -> ServiceResult<DiningTable> {
        if let Some(number) = patch.table_number {
            validate_positive(number, "table_number")?;
        }
        if let Some(capacity) = patch.capacity {
            validate_positive(capacity, "capacity")?;
        }

        let existing = self.get_table(table_id).await?;

        if let Some(number) = patch.table_number
            && number != existing.table_number
            && let Some(found) =
                dining_table::find_by_number(&self.pool, existing.restaurant_id, number).await?
            && found.id != existing.id
        {
            return Err(ServiceError::conflict(
                ErrorCode::TableNumberExists,
                format!("Table number {number} already exists in this restaurant"),
            ));
        }

        let table_number = patch.table_number.unwrap_or(existing.table_number);
        let capacity = patch.capacity.unwrap_or(existing.capacity);
        let is_enabled = patch.is_enabled.unwrap_or(existing.is_enabled);

        let table = dining_table::update(&self.pool, table_id, table_number, capacity, is_enabled)
            .await
            .map_err(|e| match e {
                RepoError::NotFound(_) => table_not_found(table_id),
                other => number_conflict(other),
            })?;

        if existing.is_enabled && !table.is_enabled {
            // Existing bookings are kept; the table just stops being offered
            let live = reservation::count_active_future_for_table(
                &self.pool,
                table_id,
                crate::utils::time::today(),
            )
            .await?;
            if live > 0 {
                tracing::warn!(
                    table_id,
                    live_reservations = live,
                    "Dining table disabled with live future reservations"
                );
            }
        }

        tracing::info!(
            table_id,
            table_number = table.table_number,
            capacity = table.capacity,
            is_enabled = table.is_enabled,
            "Dining table updated"
        );
        Ok(table)
    }

    /// Remove a table unless a pending/confirmed reservation dated `today`
    /// or later still references it
    pub async fn delete_table(&self, table_id: i64, today: NaiveDate) -> ServiceResult<()> {
        if dining_table::delete_unless_reserved(&self.pool, table_id, today).await? {
            tracing::info!(table_id, "Dining table deleted");
            return Ok(());
        }

        // Nothing deleted: tell a missing table from a guarded one
        if dining_table::find_by_id(&self.pool, table_id).await?.is_none() {
            return Err(table_not_found(table_id));
        }
        let live = reservation::count_active_future_for_table(&self.pool, table_id, today).await?;
        tracing::warn!(
            table_id,
            live_reservations = live,
            "Refused to delete table with future reservations"
        );
        Err(ServiceError::conflict(
            ErrorCode::TableHasFutureReservations,
            format!("Cannot delete table with future reservations ({live} live)"),
        ))
    }

    async fn ensure_restaurant(&self, restaurant_id: i64) -> ServiceResult<()> {
        if !restaurant::exists(&self.pool, restaurant_id).await? {
            return Err(ServiceError::not_found(
                ErrorCode::RestaurantNotFound,
                format!("Restaurant {restaurant_id} not found"),
            ));
        }
        Ok(())
    }
}

fn table_not_found(table_id: i64) -> ServiceError {
    ServiceError::not_found(
        ErrorCode::TableNotFound,
        format!("Dining table {table_id} not found"),
    )
}

fn number_conflict(err: RepoError) -> ServiceError {
    match err {
        RepoError::Duplicate(msg) => ServiceError::conflict(ErrorCode::TableNumberExists, msg),
        other => other.into(),
    }
}
