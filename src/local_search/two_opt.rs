//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions `1 ≤ i < j ≤ len - 2` in a depot-framed route,
//! reverse the segment `route[i..=j]`. If the resulting route is strictly
//! shorter, keep it and continue scanning from the improved route; otherwise
//! undo the reversal. Passes repeat until one completes without improvement.
//!
//! The full route distance is recomputed for every candidate rather than
//! using the four-edge delta, so reversed segments are priced correctly on
//! asymmetric matrices.
//!
//! # Complexity
//!
//! O(n³) per pass; the number of passes is bounded only by convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::trace;

use crate::distance::DistanceMatrix;
use crate::evaluation::route_distance;
use crate::models::Route;

/// Applies 2-opt to a route until it reaches a local optimum.
///
/// The returned route visits the same nodes, keeps the depot at both ends,
/// and is never longer than the input.
///
/// # Examples
///
/// ```
/// use cvrp_engine::distance::DistanceMatrix;
/// use cvrp_engine::evaluation::route_distance;
/// use cvrp_engine::local_search::two_opt_improve;
/// use cvrp_engine::models::Route;
///
/// // Depot and customers on a line: 0 at x=0, customer k at x=k.
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// let improved = two_opt_improve(Route::from_customers([1, 3, 2]), &dm);
/// assert!(route_distance(&improved, &dm) <= 6.0 + 1e-10);
/// ```
pub fn two_opt_improve(route: Route, distances: &DistanceMatrix) -> Route {
    two_opt_improve_with_limit(route, distances, None)
}

/// Like [`two_opt_improve`], but stops after at most `max_passes` passes.
///
/// Callers with a time budget use this to bound the otherwise
/// convergence-driven loop. `None` means no limit.
pub fn two_opt_improve_with_limit(
    mut route: Route,
    distances: &DistanceMatrix,
    max_passes: Option<usize>,
) -> Route {
    let n = route.nodes().len();
    if n < 4 {
        return route;
    }

    let mut best_distance = route_distance(&route, distances);
    let mut passes = 0usize;

    loop {
        if max_passes.is_some_and(|max| passes >= max) {
            break;
        }
        passes += 1;

        let mut improved = false;
        for i in 1..n - 2 {
            for j in i + 1..=n - 2 {
                route.nodes_mut()[i..=j].reverse();
                let d = route_distance(&route, distances);
                if d < best_distance {
                    best_distance = d;
                    improved = true;
                } else {
                    route.nodes_mut()[i..=j].reverse();
                }
            }
        }

        if !improved {
            break;
        }
    }

    trace!(passes, distance = best_distance, "2-opt finished");
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    fn euclidean(points: &[(f64, f64)]) -> DistanceMatrix {
        let n = points.len();
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                let dx = points[i].0 - points[j].0;
                let dy = points[i].1 - points[j].1;
                dm.set(i, j, (dx * dx + dy * dy).sqrt());
            }
        }
        dm
    }

    fn square() -> DistanceMatrix {
        euclidean(&[(0.0, 0.0), (0.0, 2.0), (2.0, 0.0), (2.0, 2.0)])
    }

    fn sorted(route: &Route) -> Vec<usize> {
        let mut nodes = route.nodes().to_vec();
        nodes.sort_unstable();
        nodes
    }

    #[test]
    fn test_2opt_uncrosses_edges() {
        let dm = square();
        let route = Route::from_customers([1, 2, 3]);
        // Edges 1→2 and 3→0 are the square's diagonals.
        let before = route_distance(&route, &dm);
        let improved = two_opt_improve(route, &dm);
        assert_eq!(improved.nodes(), &[0, 1, 3, 2, 0]);
        assert!((route_distance(&improved, &dm) - 8.0).abs() < 1e-10);
        assert!(route_distance(&improved, &dm) < before);
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = square();
        let route = Route::from_customers([1, 3, 2]);
        let improved = two_opt_improve(route.clone(), &dm);
        assert_eq!(improved, route);
    }

    #[test]
    fn test_2opt_idempotent() {
        let dm = euclidean(&[
            (5.0, 5.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (3.0, 7.0),
        ]);
        let once = two_opt_improve(Route::from_customers([1, 4, 2, 5, 3]), &dm);
        let twice = two_opt_improve(once.clone(), &dm);
        assert!((route_distance(&once, &dm) - route_distance(&twice, &dm)).abs() < 1e-10);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_2opt_does_not_worsen_and_keeps_nodes() {
        let dm = euclidean(&[
            (5.0, 5.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
        ]);
        let initial = Route::from_customers([1, 4, 2, 3]);
        let initial_dist = route_distance(&initial, &dm);
        let improved = two_opt_improve(initial.clone(), &dm);
        assert!(route_distance(&improved, &dm) <= initial_dist + 1e-10);
        assert_eq!(sorted(&improved), sorted(&initial));
        assert_eq!(improved.nodes().first(), Some(&0));
        assert_eq!(improved.nodes().last(), Some(&0));
    }

    #[test]
    fn test_2opt_asymmetric_prices_reversed_segment() {
        // Going 1→2 is cheap, 2→1 is very expensive: reversing [1,2] must
        // not be accepted even though the end edges get cheaper.
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![5.0, 100.0, 0.0],
        ])
        .expect("square");
        let route = Route::from_customers([1, 2]);
        let improved = two_opt_improve(route.clone(), &dm);
        assert_eq!(improved, route);
    }

    #[test]
    fn test_2opt_short_routes_unchanged() {
        let dm = square();
        assert_eq!(two_opt_improve(Route::new(), &dm), Route::new());
        let single = Route::from_customers([2]);
        assert_eq!(two_opt_improve(single.clone(), &dm), single);
    }

    #[test]
    fn test_2opt_pass_limit() {
        let dm = square();
        let route = Route::from_customers([1, 2, 3]);
        let untouched = two_opt_improve_with_limit(route.clone(), &dm, Some(0));
        assert_eq!(untouched, route);
        let one_pass = two_opt_improve_with_limit(route, &dm, Some(1));
        assert_eq!(one_pass.nodes(), &[0, 1, 3, 2, 0]);
    }
}
