//! Nearest-neighbor constructive heuristic.
//!
//! Builds routes greedily: starting from the depot, always visit the nearest
//! unvisited customer that still fits in the vehicle. When nothing fits,
//! close the route and start the next vehicle.
//!
//! # Complexity
//!
//! O(V·C²) where V = vehicles and C = customers, since every step rescans
//! all unvisited customers.

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::models::{Problem, Route, DEPOT};

/// Constructs routes using the nearest-neighbor heuristic.
///
/// At most [`Problem::vehicle_count`] routes are produced. Ties between
/// equally distant candidates go to the customer earlier in input order.
/// Customers that cannot be placed once the fleet is used up are left out
/// of the result; callers detect this with
/// [`check_demand`](crate::evaluation::check_demand) or by counting served
/// customers.
///
/// # Examples
///
/// ```
/// use cvrp_engine::constructive::nearest_neighbor;
/// use cvrp_engine::distance::DistanceMatrix;
/// use cvrp_engine::models::{Customer, Depot, Problem};
///
/// let problem = Problem::new(
///     Depot::new(0.0, 0.0),
///     vec![
///         Customer::new("a", 0.0, 1.0, 10),
///         Customer::new("b", 0.0, 2.0, 10),
///         Customer::new("c", 0.0, 3.0, 10),
///     ],
///     1,
///     30,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
///
/// let routes = nearest_neighbor(&problem, &dm);
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes[0].nodes(), &[0, 1, 2, 3, 0]);
/// ```
pub fn nearest_neighbor(problem: &Problem, distances: &DistanceMatrix) -> Vec<Route> {
    let mut visited = vec![false; problem.num_nodes()];
    visited[DEPOT] = true;
    let mut remaining = problem.num_customers();
    let mut routes = Vec::new();

    while routes.len() < problem.vehicle_count() && remaining > 0 {
        let route = build_route(problem, distances, &mut visited);
        if route.is_empty() {
            // Every unvisited customer exceeds an empty vehicle's capacity.
            break;
        }
        remaining -= route.num_customers();
        routes.push(route);
    }

    debug!(
        routes = routes.len(),
        dropped = remaining,
        "nearest neighbor construction finished"
    );
    routes
}

/// Fills one vehicle, marking every customer it takes as visited.
fn build_route(problem: &Problem, distances: &DistanceMatrix, visited: &mut [bool]) -> Route {
    let capacity = i64::from(problem.vehicle_capacity());
    let mut route = Route::new();
    let mut current = DEPOT;
    let mut load: i64 = 0;

    loop {
        let candidates = problem.customer_nodes().filter(|&c| {
            !visited[c] && load + i64::from(problem.demand(c)) <= capacity
        });
        match distances.nearest_neighbor(current, candidates) {
            Some(next) => {
                visited[next] = true;
                load += i64::from(problem.demand(next));
                route.push_customer(next);
                current = next;
            }
            None => break,
        }
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Depot};

    fn line_matrix(n: usize) -> DistanceMatrix {
        // Node i sits at position i on a line; the depot at 0.
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    fn problem(demands: &[i32], vehicles: usize, capacity: i32) -> Problem {
        let customers = demands
            .iter()
            .enumerate()
            .map(|(i, &d)| Customer::new(format!("c{i}"), 0.0, 0.0, d))
            .collect();
        Problem::new(Depot::new(0.0, 0.0), customers, vehicles, capacity).expect("valid")
    }

    #[test]
    fn test_nn_all_on_one_route() {
        let p = problem(&[10, 10, 10], 1, 100);
        let routes = nearest_neighbor(&p, &line_matrix(4));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].customers(), &[1, 2, 3]);
    }

    #[test]
    fn test_nn_capacity_forces_two_routes() {
        // Capacity fits exactly two customers; two vehicles cover all three.
        let p = problem(&[10, 10, 10], 2, 20);
        let routes = nearest_neighbor(&p, &line_matrix(4));
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].customers(), &[1, 2]);
        assert_eq!(routes[1].customers(), &[3]);
        for r in &routes {
            assert!(r.load(&p) <= 20);
            assert_eq!(r.nodes().first(), Some(&DEPOT));
            assert_eq!(r.nodes().last(), Some(&DEPOT));
        }
    }

    #[test]
    fn test_nn_skips_infeasible_nearest() {
        // Customer 2 is nearer after 1 but does not fit; 3 does.
        let p = problem(&[10, 15, 5], 2, 20);
        let routes = nearest_neighbor(&p, &line_matrix(4));
        assert_eq!(routes[0].customers(), &[1, 3]);
        assert_eq!(routes[1].customers(), &[2]);
    }

    #[test]
    fn test_nn_drops_when_fleet_exhausted() {
        let p = problem(&[10, 10, 10], 1, 15);
        let routes = nearest_neighbor(&p, &line_matrix(4));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].customers(), &[1]);
    }

    #[test]
    fn test_nn_oversized_customer_never_served() {
        let p = problem(&[50, 5], 3, 20);
        let routes = nearest_neighbor(&p, &line_matrix(3));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].customers(), &[2]);
    }

    #[test]
    fn test_nn_empty() {
        let p = problem(&[], 2, 10);
        let routes = nearest_neighbor(&p, &line_matrix(1));
        assert!(routes.is_empty());
    }

    #[test]
    fn test_nn_tie_goes_to_input_order() {
        let p = problem(&[1, 1], 1, 10);
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 4.0, 4.0],
            vec![4.0, 0.0, 1.0],
            vec![4.0, 1.0, 0.0],
        ])
        .expect("square");
        let routes = nearest_neighbor(&p, &dm);
        assert_eq!(routes[0].customers(), &[1, 2]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let p = problem(&[5, 5], 1, 100);
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 1.0],
            vec![10.0, 0.0, 9.0],
            vec![1.0, 9.0, 0.0],
        ])
        .expect("square");
        let routes = nearest_neighbor(&p, &dm);
        assert_eq!(routes[0].customers(), &[2, 1]);
    }
}
