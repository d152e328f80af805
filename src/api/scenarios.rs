//! Scenario endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::time::Instant;

use super::error::ApiError;
use super::response::ApiResponse;
use crate::{
    domain::{RawScenarioInput, ScenarioResult},
    service::AppState,
};

type ScenarioList = ApiResponse<Vec<ScenarioResult>>;

/// GET /scenarios/preloaded
pub async fn get_preloaded(State(st): State<AppState>) -> ScenarioList {
    let results = st.scenarios.preloaded_scenarios().await;
    let count = results.len();
    ApiResponse::success(results).with_count(count)
}

/// POST /scenarios/calculate - calculate without storing
pub async fn calculate(
    State(st): State<AppState>,
    payload: Result<Json<RawScenarioInput>, JsonRejection>,
) -> Result<ApiResponse<ScenarioResult>, ApiError> {
    let Json(raw) = payload?;
    let start = Instant::now();
    let result = st.scenarios.calculate_scenario(&raw).await?;
    Ok(ApiResponse::success(result).with_duration(start.elapsed().as_millis() as u64))
}

/// GET /scenarios
pub async fn list(State(st): State<AppState>) -> ScenarioList {
    let results = st.scenarios.list_scenarios().await;
    let count = results.len();
    ApiResponse::success(results).with_count(count)
}

/// POST /scenarios - calculate and append to the list
pub async fn add(
    State(st): State<AppState>,
    payload: Result<Json<RawScenarioInput>, JsonRejection>,
) -> Result<ApiResponse<ScenarioResult>, ApiError> {
    let Json(raw) = payload?;
    let result = st.scenarios.add_scenario(&raw).await?;
    Ok(ApiResponse::success(result))
}

/// GET /scenarios/:name
pub async fn get(
    State(st): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiResponse<ScenarioResult>, ApiError> {
    st.scenarios
        .get_scenario(&name)
        .await
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::NotFound(format!("scenario '{name}'")))
}

/// DELETE /scenarios/:name
pub async fn remove(
    State(st): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiResponse<ScenarioResult>, ApiError> {
    let removed = st.scenarios.remove_scenario(&name).await?;
    Ok(ApiResponse::success(removed))
}

/// POST /scenarios/reset - back to the preloaded pair
pub async fn reset(State(st): State<AppState>) -> ScenarioList {
    let results = st.scenarios.reset_to_preloaded().await;
    let count = results.len();
    ApiResponse::success(results).with_count(count)
}
