//! Concurrency checks for the scenario service
//!
//! - Many clients adding distinct scenarios at once keep every result
//! - Racing adds of the same name admit exactly one
//! - Readers see a consistent list while writers add and remove

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;

use freight_scenario_engine::config::LatencyConfig;
use freight_scenario_engine::domain::{RawNumber, RawScenarioInput};
use freight_scenario_engine::service::{ScenarioService, ServiceError};
use freight_scenario_engine::store::StoreError;

fn build_test_service() -> ScenarioService {
    ScenarioService::new(Some(7), LatencyConfig::default())
}

fn scenario(name: &str, frequency: f64) -> RawScenarioInput {
    RawScenarioInput {
        name: Some(name.into()),
        tonnage: Some(RawNumber::from(720000.0)),
        transport_mode: Some("rail_electric".into()),
        train_frequency: Some(RawNumber::from(frequency)),
        distance_to_terminal: Some(RawNumber::from(45.0)),
        distance_to_customer: Some(RawNumber::from(80.0)),
        description: None,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_keep_every_scenario() {
    let service = Arc::new(build_test_service());
    let mut tasks = JoinSet::new();

    for i in 0..32 {
        let svc = Arc::clone(&service);
        tasks.spawn(async move {
            svc.add_scenario(&scenario(&format!("Client {i}"), (i % 10) as f64))
                .await
        });
    }

    while let Some(joined) = tasks.join_next().await {
        joined.unwrap().unwrap();
    }

    let names: HashSet<String> = service
        .list_scenarios()
        .await
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names.len(), 34);
    assert!(names.contains("Client 0"));
    assert!(names.contains("Client 31"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_duplicate_names_admit_one() {
    let service = Arc::new(build_test_service());
    let mut tasks = JoinSet::new();

    for _ in 0..16 {
        let svc = Arc::clone(&service);
        tasks.spawn(async move { svc.add_scenario(&scenario("Contended", 5.0)).await });
    }

    let mut accepted = 0;
    let mut duplicates = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined.unwrap() {
            Ok(_) => accepted += 1,
            Err(ServiceError::Store(StoreError::DuplicateName(_))) => duplicates += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(duplicates, 15);
    assert_eq!(service.scenario_count().await, 3);
}

/// Readers always see the preloaded pair at the front while writers churn the tail.
#[tokio::test]
#[ignore] // Slow: many rounds of add/remove
async fn test_concurrent_read_write_operations() {
    let service = Arc::new(build_test_service());
    let mut tasks = JoinSet::new();

    for _ in 0..20 {
        let svc = Arc::clone(&service);
        tasks.spawn(async move {
            for _ in 0..50 {
                let list = svc.list_scenarios().await;
                assert!(list.len() >= 2);
                assert_eq!(list[0].name, "Current Terminal (Diesel, Limited Capacity)");
                let _ = svc.insights().await;
                let _ = svc.summary().await;
                tokio::time::sleep(Duration::from_micros(100)).await;
            }
        });
    }

    for w in 0..10 {
        let svc = Arc::clone(&service);
        tasks.spawn(async move {
            for round in 0..20 {
                let name = format!("Writer {w} round {round}");
                svc.add_scenario(&scenario(&name, 3.0)).await.unwrap();
                svc.remove_scenario(&name).await.unwrap();
            }
        });
    }

    let start = Instant::now();
    while let Some(joined) = tasks.join_next().await {
        joined.unwrap();
    }
    println!("read/write churn finished in {:?}", start.elapsed());

    assert_eq!(service.scenario_count().await, 2);
}
