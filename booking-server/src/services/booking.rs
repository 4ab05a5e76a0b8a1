//! Booking Lifecycle Manager (预订生命周期)
//!
//! Creates, edits and moves reservations through their status machine:
//!
//! ```text
//! pending ──confirm──▶ confirmed ──complete──▶ completed
//!    │                     │
//!    └──cancel──▶ cancelled ◀──cancel──┘
//! ```
//!
//! `cancelled` and `completed` are terminal. Slot exclusivity is decided by
//! the store's unique index; the pre-checks here only turn the common case
//! into a friendlier error before the write.

use chrono::NaiveDate;
use shared::error::ErrorCode;
use shared::models::{
    DiningTable, Reservation, ReservationCreate, ReservationFilter, ReservationStatus,
    ReservationUpdate,
};
use sqlx::SqlitePool;

use crate::db::repository::reservation::{NewReservation, ReservationChanges};
use crate::db::repository::{RepoError, dining_table, reservation, restaurant};
use crate::services::error::{ServiceError, ServiceResult};
use crate::utils::time::{normalize_slot, validate_date_range, validate_not_past};
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text, validate_positive};

/// Whether the status machine allows `from → to`
pub const fn can_transition(from: ReservationStatus, to: ReservationStatus) -> bool {
    use ReservationStatus::*;
    matches!(
        (from, to),
        (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
    )
}

fn ensure_transition(from: ReservationStatus, to: ReservationStatus) -> ServiceResult<()> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(ServiceError::invalid_state(
            ErrorCode::InvalidStatusTransition,
            format!("Cannot change reservation status from {from} to {to}"),
        ))
    }
}

#[derive(Clone, Debug)]
pub struct BookingManager {
    pool: SqlitePool,
}

impl BookingManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Book `table_id` for (date, time) in `pending` status
    ///
    /// Of any number of concurrent calls for the same slot exactly one
    /// succeeds; the rest get `Conflict(TableAlreadyReserved)`.
    pub async fn create_reservation(
        &self,
        data: ReservationCreate,
        today: NaiveDate,
    ) -> ServiceResult<Reservation> {
        validate_positive(data.party_size, "party_size")?;
        let slot = normalize_slot(&data.reservation_time)?;
        validate_optional_text(&data.special_request, "special_request", MAX_NOTE_LEN)?;
        validate_not_past(data.reservation_date, today)?;

        if !restaurant::exists(&self.pool, data.restaurant_id).await? {
            return Err(ServiceError::not_found(
                ErrorCode::RestaurantNotFound,
                format!("Restaurant {} not found", data.restaurant_id),
            ));
        }
        let table = self.load_table(data.table_id).await?;
        check_table(&table, data.restaurant_id, data.party_size, true)?;

        if reservation::find_by_table_and_slot(
            &self.pool,
            table.id,
            data.reservation_date,
            &slot,
            None,
        )
        .await?
        .is_some()
        {
            return Err(slot_taken(&table, data.reservation_date, &slot));
        }

        let special_request = clean_note(data.special_request.as_deref());
        let row = NewReservation {
            user_id: data.user_id,
            restaurant_id: data.restaurant_id,
            table_id: table.id,
            reservation_date: data.reservation_date,
            reservation_time: &slot,
            party_size: data.party_size,
            special_request,
        };

        match reservation::insert(&self.pool, &row).await {
            Ok(Some(created)) => {
                tracing::info!(
                    reservation_id = created.id,
                    user_id = created.user_id,
                    restaurant_id = created.restaurant_id,
                    table_id = created.table_id,
                    date = %created.reservation_date,
                    time = %created.reservation_time,
                    party_size = created.party_size,
                    "Reservation created"
                );
                Ok(created)
            }
            Ok(None) => {
                // Table was deleted or disabled between the check and the insert
                let table = self.load_table(data.table_id).await?;
                check_table(&table, data.restaurant_id, data.party_size, true)?;
                Err(ServiceError::Database(
                    "Reservation insert matched no table row".into(),
                ))
            }
            Err(RepoError::Duplicate(_)) => {
                Err(slot_taken(&table, data.reservation_date, &slot))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Edit a pending or confirmed reservation
    ///
    /// Moving it to another (table, date, time) re-checks the target slot,
    /// ignoring the reservation itself. User and restaurant never change.
    pub async fn update_reservation(
        &self,
        id: i64,
        patch: ReservationUpdate,
        today: NaiveDate,
    ) -> ServiceResult<Reservation> {
        let existing = self.get_reservation(id).await?;
        if !existing.status.holds_slot() {
            return Err(not_editable(&existing));
        }

        if let Some(party_size) = patch.party_size {
            validate_positive(party_size, "party_size")?;
        }
        validate_optional_text(&patch.special_request, "special_request", MAX_NOTE_LEN)?;

        let slot = match patch.reservation_time.as_deref() {
            Some(time) => normalize_slot(time)?,
            None => existing.reservation_time.clone(),
        };
        let table_id = patch.table_id.unwrap_or(existing.table_id);
        let date = patch.reservation_date.unwrap_or(existing.reservation_date);
        let party_size = patch.party_size.unwrap_or(existing.party_size);

        let slot_changed = table_id != existing.table_id
            || date != existing.reservation_date
            || slot != existing.reservation_time;

        if slot_changed {
            validate_not_past(date, today)?;
        }

        if slot_changed || party_size != existing.party_size {
            let table = self.load_table(table_id).await?;
            check_table(&table, existing.restaurant_id, party_size, slot_changed)?;

            if slot_changed
                && reservation::find_by_table_and_slot(&self.pool, table_id, date, &slot, Some(id))
                    .await?
                    .is_some()
            {
                return Err(slot_taken(&table, date, &slot));
            }
        }

        let special_request = match patch.special_request.as_deref() {
            Some(note) => clean_note(Some(note)),
            None => existing.special_request.as_deref(),
        };
        let changes = ReservationChanges {
            table_id,
            reservation_date: date,
            reservation_time: &slot,
            party_size,
            special_request,
            require_enabled_table: slot_changed,
        };

        match reservation::update(&self.pool, id, &changes).await {
            Ok(true) => {
                let updated = reservation::get_required(&self.pool, id).await?;
                tracing::info!(
                    reservation_id = id,
                    table_id = updated.table_id,
                    date = %updated.reservation_date,
                    time = %updated.reservation_time,
                    party_size = updated.party_size,
                    "Reservation updated"
                );
                Ok(updated)
            }
            Ok(false) => Err(self.diagnose_failed_update(id, table_id, existing.restaurant_id).await),
            Err(RepoError::Duplicate(_)) => {
                let table = self.load_table(table_id).await?;
                Err(slot_taken(&table, date, &slot))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Apply one status-machine transition
    ///
    /// The write is a compare-and-set on the status that was validated; when
    /// another writer got there first the transition is re-validated against
    /// the new status.
    pub async fn set_status(
        &self,
        id: i64,
        new_status: ReservationStatus,
    ) -> ServiceResult<Reservation> {
        let mut current = self.get_reservation(id).await?;
        loop {
            ensure_transition(current.status, new_status)?;

            if reservation::update_status(&self.pool, id, current.status, new_status).await? {
                tracing::info!(
                    reservation_id = id,
                    from = %current.status,
                    to = %new_status,
                    "Reservation status changed"
                );
                return Ok(reservation::get_required(&self.pool, id).await?);
            }

            tracing::debug!(reservation_id = id, "Status changed concurrently, re-checking");
            current = self.get_reservation(id).await?;
        }
    }

    pub async fn cancel_reservation(&self, id: i64) -> ServiceResult<Reservation> {
        self.set_status(id, ReservationStatus::Cancelled).await
    }

    pub async fn get_reservation(&self, id: i64) -> ServiceResult<Reservation> {
        reservation::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found(
                    ErrorCode::ReservationNotFound,
                    format!("Reservation {id} not found"),
                )
            })
    }

    pub async fn list_by_restaurant(
        &self,
        restaurant_id: i64,
        filter: &ReservationFilter,
    ) -> ServiceResult<Vec<Reservation>> {
        validate_date_range(filter.date_from, filter.date_to)?;
        if !restaurant::exists(&self.pool, restaurant_id).await? {
            return Err(ServiceError::not_found(
                ErrorCode::RestaurantNotFound,
                format!("Restaurant {restaurant_id} not found"),
            ));
        }
        Ok(reservation::find_by_restaurant(&self.pool, restaurant_id, filter).await?)
    }

    pub async fn list_by_user(&self, user_id: i64) -> ServiceResult<Vec<Reservation>> {
        Ok(reservation::find_by_user(&self.pool, user_id).await?)
    }

    async fn load_table(&self, table_id: i64) -> ServiceResult<DiningTable> {
        dining_table::find_by_id(&self.pool, table_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found(
                    ErrorCode::TableNotFound,
                    format!("Dining table {table_id} not found"),
                )
            })
    }

    /// Work out why a guarded update touched no row
    async fn diagnose_failed_update(
        &self,
        id: i64,
        table_id: i64,
        restaurant_id: i64,
    ) -> ServiceError {
        let current = match self.get_reservation(id).await {
            Ok(r) => r,
            Err(e) => return e,
        };
        if !current.status.holds_slot() {
            return not_editable(&current);
        }
        match self.load_table(table_id).await {
            Ok(table) => match check_table(&table, restaurant_id, 1, true) {
                Err(e) => e,
                Ok(()) => ServiceError::Database(format!(
                    "Reservation {id} update matched no row"
                )),
            },
            Err(e) => e,
        }
    }
}

/// Ownership, enabled flag (when `require_enabled`) and capacity
fn check_table(
    table: &DiningTable,
    restaurant_id: i64,
    party_size: i32,
    require_enabled: bool,
) -> ServiceResult<()> {
    if table.restaurant_id != restaurant_id {
        return Err(ServiceError::validation(
            ErrorCode::TableNotInRestaurant,
            format!(
                "Table {} does not belong to restaurant {restaurant_id}",
                table.id
            ),
        ));
    }
    if require_enabled && !table.is_enabled {
        return Err(ServiceError::validation(
            ErrorCode::TableDisabled,
            format!("Table {} is disabled", table.table_number),
        ));
    }
    if party_size > table.capacity {
        return Err(ServiceError::validation(
            ErrorCode::InsufficientCapacity,
            format!(
                "Party of {party_size} exceeds capacity {} of table {}",
                table.capacity, table.table_number
            ),
        ));
    }
    Ok(())
}

fn slot_taken(table: &DiningTable, date: NaiveDate, time: &str) -> ServiceError {
    tracing::warn!(
        table_id = table.id,
        %date,
        time,
        "Rejected booking for an already reserved slot"
    );
    ServiceError::conflict(
        ErrorCode::TableAlreadyReserved,
        format!(
            "Table {} is already reserved on {date} at {time}",
            table.table_number
        ),
    )
}

fn not_editable(reservation: &Reservation) -> ServiceError {
    ServiceError::invalid_state(
        ErrorCode::ReservationNotEditable,
        format!(
            "Reservation {} is {} and can no longer be changed",
            reservation.id, reservation.status
        ),
    )
}

/// Blank notes are stored as NULL
fn clean_note(note: Option<&str>) -> Option<&str> {
    note.map(str::trim).filter(|n| !n.is_empty())
}
