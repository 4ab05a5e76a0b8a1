//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity (门店)
///
/// Only the fields the booking core needs to answer "does this restaurant exist".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
}
