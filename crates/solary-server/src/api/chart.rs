//! The solar chart endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use solary_core::models::ChartRequest;
use solary_core::{handle_chart_request, ChartOutcome};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub apikey: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
}

/// GET /api/solar_chart?apikey=...&lat=...&lng=...
///
/// Without coordinates this reports the caller's subscription status; with
/// coordinates it returns the aggregated dataset for the matching location.
pub async fn get_solar_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> Response {
    let request = ChartRequest {
        apikey: query.apikey.unwrap_or_default(),
        lat: query.lat,
        lng: query.lng,
    };

    let outcome = handle_chart_request(state.repository(), &request, Utc::now()).await;

    match outcome {
        ChartOutcome::SubscriptionStatus {
            expiration_date,
            valid_for_days,
        } => (
            StatusCode::OK,
            Json(json!({
                "subscription_valid": true,
                "expiration_date": expiration_date.to_rfc3339(),
                "valid_for_days": valid_for_days,
            })),
        )
            .into_response(),
        ChartOutcome::Data(aggregate) => (StatusCode::OK, Json(aggregate)).into_response(),
        ChartOutcome::Failed(err) => {
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(json!({ "error": err.user_message(state.portal_urls()) })),
            )
                .into_response()
        }
    }
}
