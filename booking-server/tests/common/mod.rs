//! Shared fixtures: a fresh on-disk SQLite database per test

#![allow(dead_code)]

use std::time::Duration;

use booking_server::{Config, DbService, ServerState};
use chrono::NaiveDate;
use shared::models::{DiningTable, DiningTableCreate, Reservation, ReservationCreate, RestaurantCreate};
use tempfile::TempDir;

/// "Today" for service-level tests; booking dates below are after it
pub const TODAY: &str = "2024-05-28";

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn today() -> NaiveDate {
    date(TODAY)
}

pub struct TestEnv {
    // Dropping the directory removes the database
    _dir: TempDir,
    pub state: ServerState,
}

impl TestEnv {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
        let db = DbService::new(&config.database_path, 8, Duration::from_secs(5))
            .await
            .expect("open test database");
        let state = ServerState::new(config, db.pool);
        Self { _dir: dir, state }
    }

    pub async fn restaurant(&self, name: &str) -> i64 {
        booking_server::db::repository::restaurant::create(
            &self.state.pool,
            RestaurantCreate { name: name.into() },
        )
        .await
        .expect("create restaurant")
        .id
    }

    pub async fn table(&self, restaurant_id: i64, table_number: i32, capacity: i32) -> DiningTable {
        self.state
            .tables
            .create_table(
                restaurant_id,
                DiningTableCreate {
                    table_number,
                    capacity,
                },
            )
            .await
            .expect("create table")
    }

    pub async fn book(
        &self,
        restaurant_id: i64,
        table_id: i64,
        day: &str,
        time: &str,
        party_size: i32,
    ) -> Reservation {
        self.state
            .booking
            .create_reservation(request(restaurant_id, table_id, day, time, party_size), today())
            .await
            .expect("create reservation")
    }
}

pub fn request(
    restaurant_id: i64,
    table_id: i64,
    day: &str,
    time: &str,
    party_size: i32,
) -> ReservationCreate {
    ReservationCreate {
        user_id: 1001,
        restaurant_id,
        table_id,
        reservation_date: date(day),
        reservation_time: time.to_string(),
        party_size,
        special_request: None,
    }
}

pub fn ids(tables: &[DiningTable]) -> Vec<i64> {
    tables.iter().map(|t| t.id).collect()
}
