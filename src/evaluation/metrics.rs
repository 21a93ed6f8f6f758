//! Per-route distance, duration, and fuel.

use crate::distance::DistanceMatrix;
use crate::models::Route;

/// Sums `matrix[a][b]` over consecutive node pairs of a framed sequence.
///
/// # Panics
///
/// Panics if any node is outside the matrix.
pub fn path_cost(nodes: &[usize], matrix: &DistanceMatrix) -> f64 {
    nodes.windows(2).map(|w| matrix.get(w[0], w[1])).sum()
}

/// Total travel distance of a route, depot legs included.
///
/// # Panics
///
/// Panics if the route references a node outside the matrix.
///
/// # Examples
///
/// ```
/// use cvrp_engine::distance::DistanceMatrix;
/// use cvrp_engine::evaluation::route_distance;
/// use cvrp_engine::models::Route;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(route_distance(&Route::from_customers([1, 2]), &dm), 9.0);
/// ```
pub fn route_distance(route: &Route, distances: &DistanceMatrix) -> f64 {
    path_cost(route.nodes(), distances)
}

/// Total travel duration of a route.
///
/// # Panics
///
/// Panics if the route references a node outside the matrix.
pub fn route_duration(route: &Route, durations: &DistanceMatrix) -> f64 {
    path_cost(route.nodes(), durations)
}

/// Fuel burned on a route, given consumption per 100 distance units.
///
/// Returns zero when no rate is tracked.
pub fn route_fuel(route: &Route, distances: &DistanceMatrix, consumption: Option<f64>) -> f64 {
    match consumption {
        Some(rate) if rate != 0.0 => route_distance(route, distances) / 100.0 * rate,
        _ => 0.0,
    }
}
