//! Domain model types for capacitated vehicle routing.
//!
//! Provides the depot and customers, the validated problem instance, routes
//! as depot-framed sequences of matrix indices, and scored solutions.

mod customer;
mod problem;
mod route;
mod solution;

pub use customer::{Customer, Depot};
pub use problem::{node_index, Problem, DEPOT};
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
