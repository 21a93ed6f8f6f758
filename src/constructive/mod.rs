//! Constructive heuristics for building initial CVRP routes.
//!
//! - [`nearest_neighbor`] — Greedy nearest-feasible-customer construction, O(V·C²)
//! - [`clarke_wright_savings`] — Clarke-Wright savings algorithm (1964), O(n² log n)

mod clarke_wright;
mod nearest_neighbor;

pub use clarke_wright::{clarke_wright_savings, savings_list, Saving};
pub use nearest_neighbor::nearest_neighbor;
