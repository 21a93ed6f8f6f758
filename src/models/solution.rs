//! Solution and violation types.

use serde::{Deserialize, Serialize};

use super::Route;

/// A type of constraint violation in a set of routes.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Vehicle capacity exceeded.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Load that exceeded capacity.
        load: i64,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// A customer appears more than once across the routes.
    DuplicateCustomer {
        /// Matrix index of the customer.
        customer: usize,
        /// Route index of the repeated visit.
        route_index: usize,
    },
    /// A route node that is neither the depot nor a customer.
    UnknownNode {
        /// Offending matrix index.
        node: usize,
        /// Route index.
        route_index: usize,
    },
    /// More non-empty routes than vehicles.
    TooManyRoutes {
        /// Non-empty routes in the solution.
        routes: usize,
        /// Vehicles available.
        vehicles: usize,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A scored set of routes produced by one algorithm.
///
/// Built by [`SolutionEvaluator`](crate::evaluation::SolutionEvaluator); the
/// aggregate metrics are fixed at evaluation time.
///
/// # Examples
///
/// ```
/// use cvrp_engine::models::{Route, Solution};
///
/// let sol = Solution::new("manual", vec![Route::from_customers([1])], 10.0, 7200.0, 0.0);
/// assert_eq!(sol.vehicle_count(), 1);
/// assert!((sol.total_duration_hours() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SolutionData", into = "SolutionData")]
pub struct Solution {
    label: String,
    routes: Vec<Route>,
    total_distance: f64,
    total_duration: f64,
    total_fuel: f64,
    vehicle_count: usize,
}

impl Solution {
    /// Creates a solution. Empty routes are dropped.
    pub fn new(
        label: impl Into<String>,
        routes: Vec<Route>,
        total_distance: f64,
        total_duration: f64,
        total_fuel: f64,
    ) -> Self {
        let routes: Vec<Route> = routes.into_iter().filter(|r| !r.is_empty()).collect();
        Self {
            label: label.into(),
            vehicle_count: routes.len(),
            routes,
            total_distance,
            total_duration,
            total_fuel,
        }
    }

    /// Name of the algorithm that produced this solution.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Non-empty routes.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Consumes the solution, returning its routes.
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }

    /// Sum of route distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sum of route durations (matrix units, seconds recommended).
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Total duration converted from seconds to hours.
    pub fn total_duration_hours(&self) -> f64 {
        self.total_duration / 3600.0
    }

    /// Sum of route fuel consumption.
    pub fn total_fuel(&self) -> f64 {
        self.total_fuel
    }

    /// Number of vehicles used.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Total number of customers served.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.num_customers()).sum()
    }
}

/// Wire form of [`Solution`]. `vehicleCount` is written for readers but
/// recomputed from the routes on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolutionData {
    label: String,
    routes: Vec<Route>,
    total_distance: f64,
    total_duration: f64,
    total_fuel: f64,
    #[serde(default)]
    vehicle_count: usize,
}

impl From<SolutionData> for Solution {
    fn from(data: SolutionData) -> Self {
        Solution::new(
            data.label,
            data.routes,
            data.total_distance,
            data.total_duration,
            data.total_fuel,
        )
    }
}

impl From<Solution> for SolutionData {
    fn from(s: Solution) -> Self {
        Self {
            label: s.label,
            routes: s.routes,
            total_distance: s.total_distance,
            total_duration: s.total_duration,
            total_fuel: s.total_fuel,
            vehicle_count: s.vehicle_count,
        }
    }
}
