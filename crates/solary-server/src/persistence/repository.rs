//! SQLite-backed implementation of the core repository trait.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use solary_core::models::{ChartSolarSample, Location, User};
use solary_core::{solar, ChartRepository};
use tracing::{error, info};

use crate::persistence::{locations, samples, users, Database};

/// Repository handed to the core router. Clone is cheap (pool handle).
#[derive(Clone)]
pub struct SqliteRepository {
    db: Database,
}

impl SqliteRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl ChartRepository for SqliteRepository {
    async fn find_user_by_apikey(&self, apikey: &str) -> Result<Option<User>> {
        users::find_user_by_apikey(self.db.pool(), apikey)
            .await
            .inspect_err(|err| error!("user lookup failed: {err:#}"))
    }

    async fn find_location(&self, lat: i64, lon: i64) -> Result<Option<Location>> {
        locations::find_location(self.db.pool(), lat, lon)
            .await
            .inspect_err(|err| error!("location lookup failed: {err:#}"))
    }

    async fn find_samples(&self, location_id: i64) -> Result<Vec<ChartSolarSample>> {
        samples::samples_for_location(self.db.pool(), location_id)
            .await
            .inspect_err(|err| error!("sample load failed: {err:#}"))
    }

    async fn create_samples(&self, location: &Location) -> Result<Vec<ChartSolarSample>> {
        let today = Utc::now().date_naive();
        let generated = solar::generate_samples(location.lat as f64, location.lon as f64, today);
        info!(
            "generating dataset for location ({}, {})",
            location.lat, location.lon
        );
        samples::insert_samples_if_absent(self.db.pool(), location.id, &generated)
            .await
            .inspect_err(|err| error!("sample generation failed: {err:#}"))
    }
}
