//! REST API routes.

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::chart;
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/solar_chart", get(chart::get_solar_chart))
}
