//! Data models
//!
//! Shared between booking-server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (snowflake, see [`crate::util::snowflake_id`]).

pub mod dining_table;
pub mod reservation;
pub mod restaurant;

// Re-exports
pub use dining_table::*;
pub use reservation::*;
pub use restaurant::*;
