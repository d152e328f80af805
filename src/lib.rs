pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod service;
pub mod store;
pub mod telemetry;
