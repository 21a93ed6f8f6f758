//! Clarke-Wright savings algorithm.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each customer
//! on its own route (depot → customer → depot). It then merges routes by
//! computing the "savings" of joining the end of one route to the start of
//! another:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! Pairs are processed in decreasing order of savings. A pair (i, j) only
//! merges a route ending at i into a route starting at j; the mirrored
//! orientation is not attempted. Merging stops once the number of routes has
//! dropped to the fleet size.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of customers (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::models::{Problem, Route, DEPOT};

/// The savings value for joining customers `i` and `j` on one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    /// Matrix index of the first customer (`i < j`).
    pub i: usize,
    /// Matrix index of the second customer.
    pub j: usize,
    /// `d(0, i) + d(0, j) - d(i, j)`.
    pub value: f64,
}

/// Computes the savings of every unordered customer pair, best first.
///
/// Pairs are generated with `i` ascending, then `j > i` ascending; the sort is
/// stable, so equal savings keep that order. Non-positive savings are kept.
pub fn savings_list(problem: &Problem, distances: &DistanceMatrix) -> Vec<Saving> {
    let nodes: Vec<usize> = problem.customer_nodes().collect();
    let n = nodes.len();
    let mut savings = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (a, &i) in nodes.iter().enumerate() {
        for &j in &nodes[a + 1..] {
            let value = distances.get(DEPOT, i) + distances.get(DEPOT, j) - distances.get(i, j);
            savings.push(Saving { i, j, value });
        }
    }
    savings.sort_by(|a, b| b.value.total_cmp(&a.value));
    savings
}

/// A route under construction together with its load.
struct Tour {
    route: Route,
    load: i64,
}

/// Constructs routes using the Clarke-Wright savings algorithm.
///
/// Starts with one route per customer, then merges routes in order of
/// decreasing savings while the number of routes exceeds
/// [`Problem::vehicle_count`] and the merged load fits the vehicle capacity.
/// A customer whose demand alone exceeds the capacity gets no route and is
/// left unserved.
///
/// # Examples
///
/// ```
/// use cvrp_engine::constructive::clarke_wright_savings;
/// use cvrp_engine::distance::DistanceMatrix;
/// use cvrp_engine::models::{Customer, Depot, Problem};
///
/// let problem = Problem::new(
///     Depot::new(0.0, 0.0),
///     vec![Customer::new("a", 0.0, 0.0, 5), Customer::new("b", 0.0, 0.0, 5)],
///     1,
///     10,
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ])
/// .unwrap();
///
/// let routes = clarke_wright_savings(&problem, &dm);
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes[0].nodes(), &[0, 1, 2, 0]);
/// ```
pub fn clarke_wright_savings(problem: &Problem, distances: &DistanceMatrix) -> Vec<Route> {
    let capacity = i64::from(problem.vehicle_capacity());
    let target = problem.vehicle_count();

    let mut tours: Vec<Tour> = problem
        .customer_nodes()
        .map(|c| Tour {
            route: Route::from_customers([c]),
            load: i64::from(problem.demand(c)),
        })
        .filter(|t| t.load <= capacity)
        .collect();
    let dropped = problem.num_customers() - tours.len();

    let mut merges = 0usize;
    for saving in savings_list(problem, distances) {
        if tours.len() <= target {
            break;
        }

        let ends_at_i = tours
            .iter()
            .position(|t| t.route.last_customer() == Some(saving.i));
        let starts_at_j = tours
            .iter()
            .position(|t| t.route.first_customer() == Some(saving.j));

        let (a, b) = match (ends_at_i, starts_at_j) {
            (Some(a), Some(b)) if a != b => (a, b),
            _ => continue,
        };
        if tours[a].load + tours[b].load > capacity {
            continue;
        }

        let tail = tours.remove(b);
        let a = if b < a { a - 1 } else { a };
        tours[a].route.append(&tail.route);
        tours[a].load += tail.load;
        merges += 1;
    }

    debug!(
        routes = tours.len(),
        merges,
        dropped,
        "clarke-wright construction finished"
    );
    tours.into_iter().map(|t| t.route).collect()
}
