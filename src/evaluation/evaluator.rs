//! Solution evaluator: aggregates route metrics and checks constraints.

use std::collections::HashSet;

use tracing::debug;

use super::metrics::{route_distance, route_duration, route_fuel};
use crate::distance::CostMatrices;
use crate::error::{Result, RoutingError};
use crate::models::{Problem, Route, Solution, Violation, ViolationType, DEPOT};

/// Scores routes into [`Solution`]s and audits them against a problem.
///
/// # Examples
///
/// ```
/// use cvrp_engine::distance::{CostMatrices, DistanceMatrix};
/// use cvrp_engine::evaluation::SolutionEvaluator;
/// use cvrp_engine::models::Route;
///
/// let distance = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ])
/// .unwrap();
/// let duration = distance.clone();
/// let matrices = CostMatrices::new(distance, duration).unwrap();
///
/// let evaluator = SolutionEvaluator::new(&matrices, Some(10.0));
/// let sol = evaluator
///     .evaluate("manual", vec![Route::from_customers([1, 2])])
///     .unwrap();
/// assert_eq!(sol.total_distance(), 9.0);
/// assert_eq!(sol.vehicle_count(), 1);
/// assert!((sol.total_fuel() - 0.9).abs() < 1e-10);
/// ```
pub struct SolutionEvaluator<'a> {
    matrices: &'a CostMatrices,
    fuel_consumption: Option<f64>,
}

impl<'a> SolutionEvaluator<'a> {
    /// Creates an evaluator with an optional fuel rate per 100 distance units.
    pub fn new(matrices: &'a CostMatrices, fuel_consumption: Option<f64>) -> Self {
        Self {
            matrices,
            fuel_consumption,
        }
    }

    /// Creates an evaluator using the problem's fuel consumption rate.
    pub fn for_problem(problem: &Problem, matrices: &'a CostMatrices) -> Self {
        Self::new(matrices, problem.fuel_consumption())
    }

    /// Scores a list of routes under the given label.
    ///
    /// Empty routes are dropped from the result. Fails if any route references
    /// a node outside the matrices.
    pub fn evaluate(&self, label: impl Into<String>, routes: Vec<Route>) -> Result<Solution> {
        let size = self.matrices.size();
        if let Some(&node) = routes
            .iter()
            .flat_map(|r| r.nodes())
            .find(|&&n| n >= size)
        {
            return Err(RoutingError::NodeOutOfBounds { node, size });
        }

        let distances = self.matrices.distance();
        let durations = self.matrices.duration();
        let mut total_distance = 0.0;
        let mut total_duration = 0.0;
        let mut total_fuel = 0.0;
        for route in &routes {
            total_distance += route_distance(route, distances);
            total_duration += route_duration(route, durations);
            total_fuel += route_fuel(route, distances, self.fuel_consumption);
        }

        let solution = Solution::new(label, routes, total_distance, total_duration, total_fuel);
        debug!(
            label = solution.label(),
            distance = solution.total_distance(),
            vehicles = solution.vehicle_count(),
            "evaluated solution"
        );
        Ok(solution)
    }

    /// Checks routes against the problem's capacity, fleet size, and
    /// single-service constraints.
    ///
    /// A feasible set of routes has an empty violations list.
    pub fn violations(&self, problem: &Problem, routes: &[Route]) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut seen = HashSet::new();
        let capacity = problem.vehicle_capacity();

        for (route_index, route) in routes.iter().enumerate() {
            let mut load: i64 = 0;
            for &node in route.customers() {
                let known = node != DEPOT
                    && problem.customer_position(node).is_some()
                    && self.matrices.distance().contains(node);
                if !known {
                    violations.push(Violation::new(ViolationType::UnknownNode {
                        node,
                        route_index,
                    }));
                    continue;
                }
                if !seen.insert(node) {
                    violations.push(Violation::new(ViolationType::DuplicateCustomer {
                        customer: node,
                        route_index,
                    }));
                }
                load += i64::from(problem.demand(node));
            }
            if load > i64::from(capacity) {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    route_index,
                    load,
                    capacity,
                }));
            }
        }

        let used = routes.iter().filter(|r| !r.is_empty()).count();
        if used > problem.vehicle_count() {
            violations.push(Violation::new(ViolationType::TooManyRoutes {
                routes: used,
                vehicles: problem.vehicle_count(),
            }));
        }

        violations
    }
}

/// Returns the solution with the lowest total distance.
///
/// Ties keep the earliest solution. Returns `None` for an empty slice.
pub fn best_solution(solutions: &[Solution]) -> Option<&Solution> {
    best_index(solutions).map(|i| &solutions[i])
}

/// Index of the solution [`best_solution`] would pick.
pub fn best_index(solutions: &[Solution]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, s) in solutions.iter().enumerate() {
        if best.map_or(true, |(_, d)| s.total_distance() < d) {
            best = Some((i, s.total_distance()));
        }
    }
    best.map(|(i, _)| i)
}
