//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub restaurant_id: i64,
    /// Unique within the owning restaurant
    pub table_number: i32,
    pub capacity: i32,
    pub is_enabled: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub table_number: i32,
    pub capacity: i32,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub table_number: Option<i32>,
    pub capacity: Option<i32>,
    pub is_enabled: Option<bool>,
}
