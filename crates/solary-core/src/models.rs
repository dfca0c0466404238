//! Core data models for the Solary chart API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An API-key holder, together with every subscription grant they own.
///
/// The subscription-type join is resolved by the repository, so each grant
/// carries its coverage period in whole days directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub apikey: String,
    pub subscriptions: Vec<Subscription>,
}

/// A single time-bounded subscription grant.
///
/// Coverage window is `[created_at, created_at + period_days)`. A negative
/// period is accepted and simply shrinks the window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Subscription {
    pub created_at: DateTime<Utc>,
    pub period_days: i64,
}

/// A stored chart location, identified by integer degree coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub lat: i64,
    pub lon: i64,
}

/// One solar sample for a location: sun bearing, sun height, and the
/// estimated panel power at that moment of the day.
///
/// Field names match the wire format consumed by the chart frontend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSolarSample {
    pub azymut: f64,
    pub elevation: f64,
    pub power: f64,
}

/// Raw query values of one chart request, before any parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRequest {
    pub apikey: String,
    pub lat: Option<String>,
    pub lng: Option<String>,
}
