//! Route metrics, solution scoring, and feasibility checks.
//!
//! - [`route_distance`], [`route_duration`], [`route_fuel`] — pure per-route metrics
//! - [`SolutionEvaluator`] — aggregates routes into a scored [`Solution`](crate::models::Solution)
//! - [`best_solution`] — minimum-distance selection, first wins on ties
//! - [`check_demand`] — advisory total demand vs. fleet capacity

mod evaluator;
mod feasibility;
mod metrics;

pub use evaluator::{best_index, best_solution, SolutionEvaluator};
pub use feasibility::{check_demand, DemandCheck};
pub use metrics::{path_cost, route_distance, route_duration, route_fuel};
