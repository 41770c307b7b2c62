/// Cooperative cancellation between planner iterations
pub mod cancellation;
/// Caller arguments, defaults and validation
pub mod config;
/// Precomputed pixel lines between every nail pair
pub mod dictionary;
/// Run orchestration and the generation entry points
pub mod generator;
/// Canonical nail pairs and the reuse set
pub mod pairs;
/// Greedy thread selection
pub mod planner;
