//! # cvrp-engine
//!
//! Route construction and improvement for the capacitated vehicle routing
//! problem with a single depot and a homogeneous fleet.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Depot, Customer, Problem, Route, Solution)
//! - [`distance`] — Distance and travel time matrices
//! - [`evaluation`] — Route metrics, solution scoring, and demand checks
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor, Clarke-Wright)
//! - [`local_search`] — Local search operators (2-opt)
//! - [`solver`] — Pipeline running constructors, 2-opt, and ranking
//!
//! The engine never fetches matrices or reads files; callers hand it a
//! validated [`Problem`](models::Problem) and [`CostMatrices`](distance::CostMatrices).
//! Logging goes through [`tracing`]; installing a subscriber is up to the
//! application.

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{Result, RoutingError};
