//! Location persistence operations.

use anyhow::Result;
use solary_core::models::Location;
use sqlx::SqlitePool;

/// Exact-match lookup on the integer degree grid.
pub async fn find_location(pool: &SqlitePool, lat: i64, lon: i64) -> Result<Option<Location>> {
    let row = sqlx::query_as::<_, LocationRow>(
        "SELECT id, lat, lon FROM locations WHERE lat = ?1 AND lon = ?2",
    )
    .bind(lat)
    .bind(lon)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| Location {
        id: r.id,
        lat: r.lat,
        lon: r.lon,
    }))
}

/// Insert a location, returning its row id. The (lat, lon) pair is unique;
/// re-inserting an existing pair returns the stored row instead.
pub async fn insert_location(pool: &SqlitePool, lat: i64, lon: i64) -> Result<i64> {
    if let Some(existing) = find_location(pool, lat, lon).await? {
        return Ok(existing.id);
    }
    let result = sqlx::query("INSERT INTO locations (lat, lon) VALUES (?1, ?2)")
        .bind(lat)
        .bind(lon)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

#[derive(sqlx::FromRow)]
struct LocationRow {
    id: i64,
    lat: i64,
    lon: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::init_database;

    #[tokio::test]
    async fn insert_and_find_roundtrip() {
        let db = init_database(":memory:", 1).await.unwrap();
        let id = insert_location(db.pool(), 40, -74).await.unwrap();

        let found = find_location(db.pool(), 40, -74).await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!((found.lat, found.lon), (40, -74));

        assert!(find_location(db.pool(), 41, -74).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reinsert_returns_existing_row() {
        let db = init_database(":memory:", 1).await.unwrap();
        let first = insert_location(db.pool(), 52, 21).await.unwrap();
        let second = insert_location(db.pool(), 52, 21).await.unwrap();
        assert_eq!(first, second);
    }
}
