use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::persistence::{locations, samples, users};
use crate::{api, config::Config, persistence, state::AppState};
use solary_core::models::ChartSolarSample;
use solary_core::SAMPLES_PER_DAY;

async fn setup_app() -> (axum::Router, Arc<AppState>) {
    let mut config = Config::from_env();
    config.database_path = std::env::temp_dir()
        .join(format!("solary-test-{}.db", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .to_string();

    let db = persistence::init_database(&config.database_path, config.database_max_connections)
        .await
        .expect("init db");
    let state = Arc::new(AppState::new(db, config));

    let app = api::routes().with_state(state.clone());
    (app, state)
}

async fn seed_user(state: &AppState, apikey: &str, created_at: DateTime<Utc>, period_days: i64) {
    let pool = state.repository().database().pool();
    let type_id = users::insert_subscription_type(pool, "monthly", period_days)
        .await
        .expect("insert type");
    let user_id = users::insert_user(pool, apikey).await.expect("insert user");
    users::insert_subscription(pool, user_id, type_id, created_at)
        .await
        .expect("insert subscription");
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("parse json");
    (status, json)
}

#[tokio::test]
async fn unknown_apikey_returns_400() {
    let (app, _state) = setup_app().await;

    let (status, body) = get(app, "/api/solar_chart?apikey=missing").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().expect("error message");
    assert!(message.starts_with("Unknown ApiKey."));
    assert!(message.contains("pro.solary.org"));
}

#[tokio::test]
async fn missing_apikey_parameter_returns_400() {
    let (app, _state) = setup_app().await;

    let (status, body) = get(app, "/api/solar_chart").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Unknown ApiKey."));
}

#[tokio::test]
async fn expired_subscription_returns_402() {
    let (app, state) = setup_app().await;
    seed_user(&state, "expired-key", Utc::now() - Duration::days(40), 30).await;

    let (status, body) = get(app, "/api/solar_chart?apikey=expired-key").await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    let message = body["error"].as_str().expect("error message");
    assert!(message.starts_with("You don't have any valid subscriptions."));
    assert!(message.contains("signup"));
}

#[tokio::test]
async fn status_report_without_coordinates() {
    let (app, state) = setup_app().await;
    seed_user(&state, "fresh-key", Utc::now(), 30).await;

    let (status, body) = get(app, "/api/solar_chart?apikey=fresh-key").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subscription_valid"], Value::Bool(true));
    assert!(body["expiration_date"].is_string());
    let days = body["valid_for_days"].as_i64().expect("valid_for_days");
    assert!((29..=30).contains(&days), "unexpected valid_for_days {days}");
}

#[tokio::test]
async fn chart_data_for_seeded_location() {
    let (app, state) = setup_app().await;
    seed_user(&state, "chart-key", Utc::now(), 30).await;

    let pool = state.repository().database().pool();
    let location_id = locations::insert_location(pool, 40, -74).await.unwrap();
    samples::insert_samples_if_absent(
        pool,
        location_id,
        &[
            ChartSolarSample {
                azymut: 10.0,
                elevation: 20.0,
                power: 1.5,
            },
            ChartSolarSample {
                azymut: 170.0,
                elevation: 5.0,
                power: 2.5,
            },
        ],
    )
    .await
    .unwrap();

    let (status, body) = get(app, "/api/solar_chart?apikey=chart-key&lat=40&lng=-74").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["max_azymut"], Value::from(170));
    assert_eq!(body["min_azymut"], Value::from(10));
    assert_eq!(body["max_elevation"], Value::from(20));
    assert_eq!(body["min_elevation"], Value::from(5));
    assert_eq!(body["sum_power"].as_f64(), Some(4.0));
    assert_eq!(body["values"].as_array().map(|v| v.len()), Some(2));
    assert_eq!(body["values"][0]["azymut"].as_f64(), Some(10.0));
}

#[tokio::test]
async fn out_of_range_coordinates_return_400() {
    let (app, state) = setup_app().await;
    seed_user(&state, "range-key", Utc::now(), 30).await;

    let (status, body) = get(app, "/api/solar_chart?apikey=range-key&lat=100&lng=-74").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], Value::from("Parameters out of range"));
}

#[tokio::test]
async fn unparsable_coordinates_return_400() {
    let (app, state) = setup_app().await;
    seed_user(&state, "parse-key", Utc::now(), 30).await;

    let (status, body) = get(app, "/api/solar_chart?apikey=parse-key&lat=abc&lng=-74").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], Value::from("Parameters out of range"));
}

#[tokio::test]
async fn unknown_location_returns_404() {
    let (app, state) = setup_app().await;
    seed_user(&state, "lost-key", Utc::now(), 30).await;

    let (status, body) = get(app, "/api/solar_chart?apikey=lost-key&lat=40&lng=-74").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], Value::from("Location not found"));
}

#[tokio::test]
async fn empty_location_generates_its_dataset() {
    let (app, state) = setup_app().await;
    seed_user(&state, "gen-key", Utc::now(), 30).await;

    let pool = state.repository().database().pool();
    locations::insert_location(pool, 45, 7).await.unwrap();

    let (status, body) = get(
        app.clone(),
        "/api/solar_chart?apikey=gen-key&lat=45&lng=7",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["values"].as_array().map(|v| v.len()),
        Some(SAMPLES_PER_DAY)
    );
    let sum_power = body["sum_power"].as_f64().expect("sum_power");
    assert!(sum_power > 0.0);

    // Second request serves the stored rows, not a regeneration
    let (status, again) = get(app, "/api/solar_chart?apikey=gen-key&lat=45&lng=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again["sum_power"].as_f64(), Some(sum_power));
    assert_eq!(again["values"], body["values"]);
}
