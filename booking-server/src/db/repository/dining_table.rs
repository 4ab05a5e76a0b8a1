//! Dining Table Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{DiningTable, DiningTableCreate, ReservationStatus};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, restaurant_id, table_number, capacity, is_enabled, created_at, updated_at";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

/// All tables of a restaurant, enabled or not, by table number
pub async fn find_by_restaurant(
    pool: &SqlitePool,
    restaurant_id: i64,
) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE restaurant_id = ? ORDER BY table_number"
    ))
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn find_by_number(
    pool: &SqlitePool,
    restaurant_id: i64,
    table_number: i32,
) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE restaurant_id = ? AND table_number = ? LIMIT 1"
    ))
    .bind(restaurant_id)
    .bind(table_number)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

/// Enabled tables seating at least `party_size`, smallest first
pub async fn find_candidates(
    pool: &SqlitePool,
    restaurant_id: i64,
    party_size: i32,
) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE restaurant_id = ? AND is_enabled = 1 AND capacity >= ? ORDER BY capacity, table_number"
    ))
    .bind(restaurant_id)
    .bind(party_size)
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn create(
    pool: &SqlitePool,
    restaurant_id: i64,
    data: &DiningTableCreate,
) -> RepoResult<DiningTable> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO dining_table (id, restaurant_id, table_number, capacity, is_enabled, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)",
    )
    .bind(id)
    .bind(restaurant_id)
    .bind(data.table_number)
    .bind(data.capacity)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => RepoError::Duplicate(format!(
            "Table number {} already exists in restaurant {restaurant_id}",
            data.table_number
        )),
        other => other,
    })?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create dining table".into()))
}

/// Overwrite the mutable columns with already-merged values
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    table_number: i32,
    capacity: i32,
    is_enabled: bool,
) -> RepoResult<DiningTable> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE dining_table SET table_number = ?1, capacity = ?2, is_enabled = ?3, updated_at = ?4 WHERE id = ?5",
    )
    .bind(table_number)
    .bind(capacity)
    .bind(is_enabled)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Table number {table_number} already exists"))
        }
        other => other,
    })?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Dining table {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Dining table {id} not found")))
}

/// Hard delete unless a slot-holding reservation on or after `today` still
/// points at the table. Guard and delete run as one statement.
///
/// Returns `false` when nothing was deleted (missing table or guard hit).
pub async fn delete_unless_reserved(
    pool: &SqlitePool,
    id: i64,
    today: NaiveDate,
) -> RepoResult<bool> {
    let [held_a, held_b] = ReservationStatus::SLOT_HOLDING;
    let rows = sqlx::query(
        "DELETE FROM dining_table WHERE id = ?1 AND NOT EXISTS (SELECT 1 FROM reservation r WHERE r.table_id = ?1 AND r.reservation_date >= ?2 AND r.status IN (?3, ?4))",
    )
    .bind(id)
    .bind(today)
    .bind(held_a)
    .bind(held_b)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
