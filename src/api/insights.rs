//! Comparison and dashboard endpoints

use axum::extract::State;

use super::response::ApiResponse;
use crate::{
    engine::{Insights, PortfolioSummary},
    service::AppState,
};

/// GET /insights - `data` is null while fewer than two scenarios are held
pub async fn get_insights(State(st): State<AppState>) -> ApiResponse<Insights> {
    match st.scenarios.insights().await {
        Some(insights) => ApiResponse::success(insights),
        None => ApiResponse::empty(),
    }
}

/// GET /summary
pub async fn get_summary(State(st): State<AppState>) -> ApiResponse<PortfolioSummary> {
    let summary = st.scenarios.summary().await;
    let count = summary.scenario_count;
    ApiResponse::success(summary).with_count(count)
}
