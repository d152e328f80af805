use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::{Config, LatencyConfig};
use crate::domain::{RawScenarioInput, ScenarioResult};
use crate::engine::{
    generate_insights, summarize, Insights, PortfolioSummary, PreloadedScenarios,
    ScenarioCalculator, ValidationError,
};
use crate::store::{ScenarioStore, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub scenarios: Arc<ScenarioService>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        let scenarios = Arc::new(ScenarioService::new(cfg.route.random_seed, cfg.latency.clone()));
        Self { cfg, scenarios }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Front door to the engine: calculation, the preloaded snapshot, and the
/// scenario list the comparison views read from.
///
/// Calculations share no state; each gets its own route generator. With a
/// seed configured, the n-th calculation after start-up always draws the
/// same route.
pub struct ScenarioService {
    route_seed: Option<u64>,
    calculations: AtomicU64,
    preloaded: PreloadedScenarios,
    store: RwLock<ScenarioStore>,
    latency: LatencyConfig,
}

impl ScenarioService {
    /// Calculates the preloaded scenarios once and seeds the list with them.
    pub fn new(route_seed: Option<u64>, latency: LatencyConfig) -> Self {
        let preloaded = PreloadedScenarios::compute(&mut ScenarioCalculator::from_seed(route_seed));
        let store = ScenarioStore::with_scenarios(preloaded.to_vec());
        Self {
            route_seed,
            calculations: AtomicU64::new(0),
            preloaded,
            store: RwLock::new(store),
            latency,
        }
    }

    pub async fn preloaded_scenarios(&self) -> Vec<ScenarioResult> {
        simulate_latency(self.latency.preloaded_ms).await;
        self.preloaded.to_vec()
    }

    /// Validate and calculate without storing.
    pub async fn calculate_scenario(
        &self,
        raw: &RawScenarioInput,
    ) -> Result<ScenarioResult, ValidationError> {
        simulate_latency(self.latency.calculate_ms).await;
        self.calculator().calculate_raw(raw)
    }

    fn calculator(&self) -> ScenarioCalculator {
        let call = self.calculations.fetch_add(1, Ordering::Relaxed) + 1;
        ScenarioCalculator::from_seed(self.route_seed.map(|seed| seed.wrapping_add(call)))
    }

    /// Calculate and append to the scenario list.
    pub async fn add_scenario(&self, raw: &RawScenarioInput) -> Result<ScenarioResult, ServiceError> {
        let result = self.calculate_scenario(raw).await?;
        self.store.write().await.append(result.clone())?;
        info!(scenario = %result.name, "scenario added");
        Ok(result)
    }

    pub async fn remove_scenario(&self, name: &str) -> Result<ScenarioResult, StoreError> {
        let removed = self.store.write().await.remove_by_name(name)?;
        info!(scenario = %removed.name, "scenario removed");
        Ok(removed)
    }

    pub async fn get_scenario(&self, name: &str) -> Option<ScenarioResult> {
        self.store.read().await.find_by_name(name).cloned()
    }

    pub async fn list_scenarios(&self) -> Vec<ScenarioResult> {
        self.store.read().await.list_all().to_vec()
    }

    /// Throw away user scenarios and start again from the preloaded pair.
    pub async fn reset_to_preloaded(&self) -> Vec<ScenarioResult> {
        simulate_latency(self.latency.preloaded_ms).await;
        let mut store = self.store.write().await;
        store.replace_all(self.preloaded.to_vec());
        info!(count = store.len(), "scenario list reset to preloaded");
        store.list_all().to_vec()
    }

    pub async fn insights(&self) -> Option<Insights> {
        generate_insights(&*self.store.read().await)
    }

    pub async fn summary(&self) -> PortfolioSummary {
        summarize(&*self.store.read().await)
    }

    pub async fn scenario_count(&self) -> usize {
        self.store.read().await.len()
    }

    pub fn preloaded_count(&self) -> usize {
        self.preloaded.results().len()
    }

    pub async fn health_delay(&self) {
        simulate_latency(self.latency.health_ms).await;
    }
}

async fn simulate_latency(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
