//! Solar sample persistence operations.

use anyhow::Result;
use solary_core::models::ChartSolarSample;
use sqlx::{Sqlite, SqlitePool, Transaction};

/// Load all stored samples for a location, in insertion order.
pub async fn samples_for_location(
    pool: &SqlitePool,
    location_id: i64,
) -> Result<Vec<ChartSolarSample>> {
    let rows = sqlx::query_as::<_, SampleRow>(
        "SELECT azymut, elevation, power FROM chart_solars WHERE location_id = ?1 ORDER BY id",
    )
    .bind(location_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Store a generated sample set for a location, unless one already exists.
///
/// The existence re-check runs inside the transaction, so two requests racing
/// on the same empty location insert at most once; both get the stored set.
pub async fn insert_samples_if_absent(
    pool: &SqlitePool,
    location_id: i64,
    samples: &[ChartSolarSample],
) -> Result<Vec<ChartSolarSample>> {
    let mut tx = pool.begin().await?;

    let existing = count_samples_tx(&mut tx, location_id).await?;
    if existing > 0 {
        tx.rollback().await?;
        return samples_for_location(pool, location_id).await;
    }

    for sample in samples {
        sqlx::query(
            "INSERT INTO chart_solars (location_id, azymut, elevation, power) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(location_id)
        .bind(sample.azymut)
        .bind(sample.elevation)
        .bind(sample.power)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(samples.to_vec())
}

async fn count_samples_tx(tx: &mut Transaction<'_, Sqlite>, location_id: i64) -> Result<i64> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM chart_solars WHERE location_id = ?1")
            .bind(location_id)
            .fetch_one(&mut **tx)
            .await?;
    Ok(count)
}

#[derive(sqlx::FromRow)]
struct SampleRow {
    azymut: f64,
    elevation: f64,
    power: f64,
}

impl From<SampleRow> for ChartSolarSample {
    fn from(row: SampleRow) -> Self {
        ChartSolarSample {
            azymut: row.azymut,
            elevation: row.elevation,
            power: row.power,
        }
    }
}
