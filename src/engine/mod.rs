//! Scenario calculation engine.
//!
//! Raw input flows through the validator, then the allocation/cost,
//! emissions and route models, and is assembled by the calculator into a
//! `ScenarioResult`. Insights and summaries work on stored results.

pub mod allocation;
pub mod calculator;
pub mod emissions;
pub mod error;
pub mod insights;
pub mod preloaded;
pub mod rounding;
pub mod route;
pub mod summary;
pub mod validator;

pub use allocation::Allocation;
pub use calculator::ScenarioCalculator;
pub use emissions::Emissions;
pub use error::{ComputationDegenerate, ValidationError};
pub use insights::{generate_insights, Insights};
pub use preloaded::PreloadedScenarios;
pub use route::RouteSynthesizer;
pub use summary::{summarize, PortfolioSummary, ScenarioEfficiency};
pub use validator::validate_input;
