//! Reservation Repository
//!
//! Slot exclusivity is enforced by the partial unique index
//! `idx_reservation_active_slot`; every write that can place a reservation
//! into a slot is a single statement, so a lost race surfaces as
//! [`RepoError::Duplicate`] rather than a double booking.

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{Reservation, ReservationFilter, ReservationStatus};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const COLUMNS: &str = "id, user_id, restaurant_id, table_id, reservation_date, reservation_time, party_size, status, special_request, created_at, updated_at";

/// Row values for a new reservation; the slot time is already normalized
#[derive(Debug, Clone)]
pub struct NewReservation<'a> {
    pub user_id: i64,
    pub restaurant_id: i64,
    pub table_id: i64,
    pub reservation_date: NaiveDate,
    pub reservation_time: &'a str,
    pub party_size: i32,
    pub special_request: Option<&'a str>,
}

/// Full replacement of the editable columns, merged by the caller
#[derive(Debug, Clone)]
pub struct ReservationChanges<'a> {
    pub table_id: i64,
    pub reservation_date: NaiveDate,
    pub reservation_time: &'a str,
    pub party_size: i32,
    pub special_request: Option<&'a str>,
    /// Re-check that the target table exists and is enabled in the same statement
    pub require_enabled_table: bool,
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Reservation>> {
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(reservation)
}

/// The slot-holding reservation on (table, date, time), if any
///
/// `exclude_id` skips a reservation that is being moved, so it never
/// conflicts with itself.
pub async fn find_by_table_and_slot(
    pool: &SqlitePool,
    table_id: i64,
    date: NaiveDate,
    time: &str,
    exclude_id: Option<i64>,
) -> RepoResult<Option<Reservation>> {
    let [held_a, held_b] = ReservationStatus::SLOT_HOLDING;
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE table_id = ? AND reservation_date = ? AND reservation_time = ? AND status IN (?, ?) AND (? IS NULL OR id <> ?) LIMIT 1"
    ))
    .bind(table_id)
    .bind(date)
    .bind(time)
    .bind(held_a)
    .bind(held_b)
    .bind(exclude_id)
    .bind(exclude_id)
    .fetch_optional(pool)
    .await?;
    Ok(reservation)
}

/// Table ids of a restaurant that are held at (date, time)
pub async fn find_held_table_ids(
    pool: &SqlitePool,
    restaurant_id: i64,
    date: NaiveDate,
    time: &str,
) -> RepoResult<Vec<i64>> {
    let [held_a, held_b] = ReservationStatus::SLOT_HOLDING;
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT DISTINCT table_id FROM reservation WHERE restaurant_id = ? AND reservation_date = ? AND reservation_time = ? AND status IN (?, ?)",
    )
    .bind(restaurant_id)
    .bind(date)
    .bind(time)
    .bind(held_a)
    .bind(held_b)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Reservations of a restaurant ordered by date, time, then id
pub async fn find_by_restaurant(
    pool: &SqlitePool,
    restaurant_id: i64,
    filter: &ReservationFilter,
) -> RepoResult<Vec<Reservation>> {
    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM reservation WHERE restaurant_id = "));
    qb.push_bind(restaurant_id);
    if let Some(status) = filter.status {
        qb.push(" AND status = ").push_bind(status);
    }
    if let Some(from) = filter.date_from {
        qb.push(" AND reservation_date >= ").push_bind(from);
    }
    if let Some(to) = filter.date_to {
        qb.push(" AND reservation_date <= ").push_bind(to);
    }
    qb.push(" ORDER BY reservation_date, reservation_time, id");

    let reservations = qb
        .build_query_as::<Reservation>()
        .fetch_all(pool)
        .await?;
    Ok(reservations)
}

pub async fn find_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<Reservation>> {
    let reservations = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE user_id = ? ORDER BY reservation_date, reservation_time, id"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

/// Slot-holding reservations on the table dated `today` or later
pub async fn count_active_future_for_table(
    pool: &SqlitePool,
    table_id: i64,
    today: NaiveDate,
) -> RepoResult<i64> {
    let [held_a, held_b] = ReservationStatus::SLOT_HOLDING;
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM reservation WHERE table_id = ? AND reservation_date >= ? AND status IN (?, ?)",
    )
    .bind(table_id)
    .bind(today)
    .bind(held_a)
    .bind(held_b)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// Insert a `pending` reservation, conditional on the table still existing,
/// belonging to the restaurant and being enabled.
///
/// Returns `Ok(None)` when the table condition fails and
/// `Err(RepoError::Duplicate)` when the slot is already held.
pub async fn insert(pool: &SqlitePool, data: &NewReservation<'_>) -> RepoResult<Option<Reservation>> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let inserted: Option<i64> = sqlx::query_scalar(
        "INSERT INTO reservation (id, user_id, restaurant_id, table_id, reservation_date, reservation_time, party_size, status, special_request, created_at, updated_at) \
         SELECT ?1, ?2, ?3, t.id, ?4, ?5, ?6, ?7, ?8, ?9, ?9 FROM dining_table t \
         WHERE t.id = ?10 AND t.restaurant_id = ?3 AND t.is_enabled = 1 \
         RETURNING id",
    )
    .bind(id)
    .bind(data.user_id)
    .bind(data.restaurant_id)
    .bind(data.reservation_date)
    .bind(data.reservation_time)
    .bind(data.party_size)
    .bind(ReservationStatus::Pending)
    .bind(data.special_request)
    .bind(now)
    .bind(data.table_id)
    .fetch_optional(pool)
    .await?;

    match inserted {
        Some(id) => find_by_id(pool, id).await,
        None => Ok(None),
    }
}

/// Compare-and-set status change: applies only while the row is still `from`
///
/// Returns `false` if the row is missing or its status moved on.
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    from: ReservationStatus,
    to: ReservationStatus,
) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE reservation SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4",
    )
    .bind(to)
    .bind(now)
    .bind(id)
    .bind(from)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Rewrite the editable columns of a slot-holding reservation
///
/// Returns `false` if the row is missing, no longer slot-holding, or the
/// table condition fails; `Err(RepoError::Duplicate)` if the new slot is taken.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    changes: &ReservationChanges<'_>,
) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let [held_a, held_b] = ReservationStatus::SLOT_HOLDING;
    let rows = sqlx::query(
        "UPDATE reservation SET table_id = ?1, reservation_date = ?2, reservation_time = ?3, party_size = ?4, special_request = ?5, updated_at = ?6 \
         WHERE id = ?7 AND status IN (?8, ?9) \
         AND (?10 = 0 OR EXISTS (SELECT 1 FROM dining_table t WHERE t.id = ?1 AND t.restaurant_id = reservation.restaurant_id AND t.is_enabled = 1))",
    )
    .bind(changes.table_id)
    .bind(changes.reservation_date)
    .bind(changes.reservation_time)
    .bind(changes.party_size)
    .bind(changes.special_request)
    .bind(now)
    .bind(id)
    .bind(held_a)
    .bind(held_b)
    .bind(changes.require_enabled_table)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Convenience for callers that need the row back after a successful write
pub async fn get_required(pool: &SqlitePool, id: i64) -> RepoResult<Reservation> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}
