//! In-memory collection of calculated scenarios, keyed by name and kept in
//! insertion order. The first two entries feed the insights comparison.

use thiserror::Error;

use crate::domain::ScenarioResult;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("a scenario named '{0}' already exists")]
    DuplicateName(String),

    #[error("no scenario named '{0}'")]
    NotFound(String),
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioStore {
    scenarios: Vec<ScenarioResult>,
}

impl ScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from results, keeping the first of any duplicate names.
    pub fn with_scenarios(results: impl IntoIterator<Item = ScenarioResult>) -> Self {
        let mut store = Self::new();
        store.replace_all(results);
        store
    }

    pub fn append(&mut self, result: ScenarioResult) -> Result<(), StoreError> {
        if self.contains(&result.name) {
            return Err(StoreError::DuplicateName(result.name));
        }
        self.scenarios.push(result);
        Ok(())
    }

    pub fn remove_by_name(&mut self, name: &str) -> Result<ScenarioResult, StoreError> {
        let index = self
            .scenarios
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        Ok(self.scenarios.remove(index))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ScenarioResult> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Drop everything and load `results` in order.
    pub fn replace_all(&mut self, results: impl IntoIterator<Item = ScenarioResult>) {
        self.scenarios.clear();
        for result in results {
            if !self.contains(&result.name) {
                self.scenarios.push(result);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.scenarios.iter()
    }

    pub fn list_all(&self) -> &[ScenarioResult] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScenarioStore {
    type Item = &'a ScenarioResult;
    type IntoIter = std::slice::Iter<'a, ScenarioResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, TransportMode};
    use crate::engine::generate_insights;

    fn result(name: &str, cost: f64, co2: u64) -> ScenarioResult {
        ScenarioResult {
            name: name.into(),
            rail_capacity_tons: 0,
            truck_volume_tons: 0,
            total_cost_msek: cost,
            co2_rail_tons: 0,
            co2_truck_tons: co2,
            co2_total_tons: co2,
            route: vec![GeoPoint::new(63.2, 14.8), GeoPoint::new(63.2, 14.6)],
            notes: vec![],
            transport_mode: TransportMode::Truck,
            train_frequency: 0.0,
            distance_to_terminal: 0.0,
            distance_to_customer: 0.0,
            tonnage: 1.0,
            description: None,
        }
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = ScenarioStore::new();
        store.append(result("b", 1.0, 1)).unwrap();
        store.append(result("a", 2.0, 2)).unwrap();
        store.append(result("c", 3.0, 3)).unwrap();

        let names: Vec<&str> = store.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut store = ScenarioStore::new();
        store.append(result("a", 1.0, 1)).unwrap();
        let err = store.append(result("a", 9.0, 9)).unwrap_err();

        assert_eq!(err, StoreError::DuplicateName("a".into()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_name("a").unwrap().total_cost_msek, 1.0);
    }

    #[test]
    fn test_remove_by_name() {
        let mut store = ScenarioStore::with_scenarios(vec![result("a", 1.0, 1), result("b", 2.0, 2)]);

        let removed = store.remove_by_name("a").unwrap();
        assert_eq!(removed.name, "a");
        assert!(!store.contains("a"));
        assert_eq!(store.list_all()[0].name, "b");

        assert_eq!(
            store.remove_by_name("a").unwrap_err(),
            StoreError::NotFound("a".into())
        );
    }

    #[test]
    fn test_removing_baseline_shifts_insights_pair() {
        let mut store = ScenarioStore::with_scenarios(vec![
            result("first", 10.0, 100),
            result("second", 20.0, 200),
            result("third", 5.0, 50),
        ]);
        assert_eq!(generate_insights(&store).unwrap().baseline, "first");

        store.remove_by_name("first").unwrap();
        let insights = generate_insights(&store).unwrap();
        assert_eq!(insights.baseline, "second");
        assert_eq!(insights.comparison, "third");
        assert_eq!(insights.better_scenario, "third");

        store.remove_by_name("second").unwrap();
        assert!(generate_insights(&store).is_none());
    }

    #[test]
    fn test_replace_all_skips_duplicates() {
        let mut store = ScenarioStore::new();
        store.append(result("old", 1.0, 1)).unwrap();
        store.replace_all(vec![result("x", 1.0, 1), result("x", 2.0, 2), result("y", 3.0, 3)]);

        assert_eq!(store.len(), 2);
        assert!(!store.contains("old"));
        assert_eq!(store.find_by_name("x").unwrap().total_cost_msek, 1.0);
    }
}
