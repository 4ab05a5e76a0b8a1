//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reservation status (预订状态)
///
/// `pending` and `confirmed` hold the table for their slot;
/// `cancelled` and `completed` are terminal and release it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// Statuses that occupy a (table, date, time) slot
    pub const SLOT_HOLDING: [ReservationStatus; 2] =
        [ReservationStatus::Pending, ReservationStatus::Confirmed];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// No transition may leave a terminal status
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Whether a reservation in this status conflicts with another booking of the same slot
    pub const fn holds_slot(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation entity (预订)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub table_id: i64,
    pub reservation_date: NaiveDate,
    /// Slot label, normalized `HH:MM`
    pub reservation_time: String,
    pub party_size: i32,
    pub status: ReservationStatus,
    pub special_request: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub user_id: i64,
    pub restaurant_id: i64,
    pub table_id: i64,
    pub reservation_date: NaiveDate,
    pub reservation_time: String,
    pub party_size: i32,
    #[serde(default)]
    pub special_request: Option<String>,
}

/// Update reservation payload
///
/// `user_id` and `restaurant_id` are immutable after creation and are not part of the patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub table_id: Option<i64>,
    pub reservation_date: Option<NaiveDate>,
    pub reservation_time: Option<String>,
    pub party_size: Option<i32>,
    pub special_request: Option<String>,
}

impl ReservationUpdate {
    /// Whether the patch moves the reservation to another (table, date, time)
    pub fn changes_slot(&self) -> bool {
        self.table_id.is_some() || self.reservation_date.is_some() || self.reservation_time.is_some()
    }
}

/// Status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationStatusUpdate {
    pub status: ReservationStatus,
}

/// Restaurant-level listing filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    /// Inclusive lower bound
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound
    pub date_to: Option<NaiveDate>,
}

/// Availability lookup parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub time: String,
    pub party_size: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(!ReservationStatus::Pending.is_terminal());
        assert!(!ReservationStatus::Confirmed.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
        assert!(ReservationStatus::Completed.is_terminal());
    }

    #[test]
    fn test_slot_holding_is_complement_of_terminal() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
        ] {
            assert_eq!(status.holds_slot(), !status.is_terminal());
            assert_eq!(
                status.holds_slot(),
                ReservationStatus::SLOT_HOLDING.contains(&status)
            );
        }
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&ReservationStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");

        let status: ReservationStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, ReservationStatus::Cancelled);

        assert!(serde_json::from_str::<ReservationStatus>("\"CONFIRMED\"").is_err());
    }

    #[test]
    fn test_update_changes_slot() {
        let patch = ReservationUpdate {
            party_size: Some(3),
            special_request: Some("window seat".into()),
            ..Default::default()
        };
        assert!(!patch.changes_slot());

        let patch = ReservationUpdate {
            reservation_time: Some("20:00".into()),
            ..Default::default()
        };
        assert!(patch.changes_slot());
    }
}
