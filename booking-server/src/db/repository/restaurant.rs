//! Restaurant Repository

use super::{RepoError, RepoResult};
use shared::models::{Restaurant, RestaurantCreate};
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Restaurant>> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, created_at FROM restaurant WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(restaurant)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM restaurant WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn create(pool: &SqlitePool, data: RestaurantCreate) -> RepoResult<Restaurant> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query("INSERT INTO restaurant (id, name, created_at) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(&data.name)
        .bind(now)
        .execute(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create restaurant".into()))
}
