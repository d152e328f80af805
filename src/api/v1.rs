use axum::{
    routing::{get, post},
    Router,
};

use super::{health, insights, scenarios};
use crate::service::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/scenarios", get(scenarios::list).post(scenarios::add))
        .route("/scenarios/preloaded", get(scenarios::get_preloaded))
        .route("/scenarios/calculate", post(scenarios::calculate))
        .route("/scenarios/reset", post(scenarios::reset))
        .route(
            "/scenarios/:name",
            get(scenarios::get).delete(scenarios::remove),
        )
        .route("/insights", get(insights::get_insights))
        .route("/summary", get(insights::get_summary))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/health/ready", get(health::readiness_check))
        .with_state(state)
}
