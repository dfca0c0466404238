//! Storage interface consumed by the request router.
//!
//! The router never touches storage directly; a backend implements this
//! trait and is injected per request. Methods return `anyhow::Result` so a
//! backend failure of any shape surfaces as the internal-error outcome.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{ChartSolarSample, Location, User};

#[async_trait]
pub trait ChartRepository: Send + Sync {
    /// Resolve an API key to its user, with all subscription grants attached.
    async fn find_user_by_apikey(&self, apikey: &str) -> Result<Option<User>>;

    /// Exact-match lookup on the integer degree grid.
    async fn find_location(&self, lat: i64, lon: i64) -> Result<Option<Location>>;

    /// Stored samples for a location, possibly empty.
    async fn find_samples(&self, location_id: i64) -> Result<Vec<ChartSolarSample>>;

    /// Generate and persist the sample set for a location that has none.
    ///
    /// Must be idempotent: concurrent callers racing on the same location
    /// must not duplicate rows, and every caller gets the stored set back.
    async fn create_samples(&self, location: &Location) -> Result<Vec<ChartSolarSample>>;
}
