use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::time::Instant;

use crate::service::AppState;

pub const SERVICE_MESSAGE: &str = "Transport Calculator Data Service is running";

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    message: &'static str,
    timestamp: chrono::DateTime<chrono::Utc>,
    scenario_count: usize,
}

/// GET /health
///
/// Service banner plus the number of scenarios currently held.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    state.scenarios.health_delay().await;

    let response = HealthResponse {
        status: "OK",
        message: SERVICE_MESSAGE,
        timestamp: chrono::Utc::now(),
        scenario_count: state.scenarios.scenario_count().await,
    };

    let total_duration = start.elapsed().as_millis() as u64;
    tracing::debug!(duration_ms = total_duration, "Health check completed");

    (StatusCode::OK, Json(response))
}

/// GET /health/ready - Readiness probe
///
/// The preloaded scenarios are calculated before the router exists, so a
/// running server is always ready.
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /health/live - Liveness probe
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
