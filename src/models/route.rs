//! Route type.

use serde::{Deserialize, Serialize};

use super::problem::DEPOT;
use super::Problem;
use crate::error::RoutingError;

/// An ordered sequence of matrix indices assigned to a single vehicle.
///
/// Unlike a bare customer list, the depot is stored explicitly at both ends,
/// so `nodes()` is exactly what the route metrics walk over.
///
/// # Examples
///
/// ```
/// use cvrp_engine::models::Route;
///
/// let route = Route::from_customers([2, 1]);
/// assert_eq!(route.nodes(), &[0, 2, 1, 0]);
/// assert_eq!(route.customers(), &[2, 1]);
/// assert!(!route.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Route {
    nodes: Vec<usize>,
}

impl Route {
    /// Creates an empty depot-to-depot route.
    pub fn new() -> Self {
        Self {
            nodes: vec![DEPOT, DEPOT],
        }
    }

    /// Frames a customer sequence with the depot on both sides.
    pub fn from_customers(customers: impl IntoIterator<Item = usize>) -> Self {
        let mut nodes = vec![DEPOT];
        nodes.extend(customers);
        nodes.push(DEPOT);
        Self { nodes }
    }

    /// Wraps an already framed node sequence.
    ///
    /// Returns `None` unless the sequence has at least two nodes, starts and
    /// ends at the depot, and has no depot visit in between.
    pub fn from_nodes(nodes: Vec<usize>) -> Option<Self> {
        let framed = nodes.len() >= 2
            && nodes[0] == DEPOT
            && nodes[nodes.len() - 1] == DEPOT
            && nodes[1..nodes.len() - 1].iter().all(|&n| n != DEPOT);
        framed.then_some(Self { nodes })
    }

    /// Full node sequence including both depot visits.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Customer indices in visit order (depot excluded).
    pub fn customers(&self) -> &[usize] {
        &self.nodes[1..self.nodes.len() - 1]
    }

    /// Number of customers visited.
    pub fn num_customers(&self) -> usize {
        self.nodes.len() - 2
    }

    /// Returns `true` if the route visits no customer.
    pub fn is_empty(&self) -> bool {
        self.num_customers() == 0
    }

    /// First customer, if any.
    pub fn first_customer(&self) -> Option<usize> {
        self.customers().first().copied()
    }

    /// Last customer, if any.
    pub fn last_customer(&self) -> Option<usize> {
        self.customers().last().copied()
    }

    /// Total demand served by this route.
    pub fn load(&self, problem: &Problem) -> i64 {
        self.customers()
            .iter()
            .map(|&n| i64::from(problem.demand(n)))
            .sum()
    }

    /// Inserts a customer just before the closing depot visit.
    pub(crate) fn push_customer(&mut self, customer: usize) {
        let end = self.nodes.len() - 1;
        self.nodes.insert(end, customer);
    }

    /// Appends `other`'s customers after this route's customers.
    pub(crate) fn append(&mut self, other: &Route) {
        self.nodes.pop();
        self.nodes.extend_from_slice(&other.nodes[1..]);
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [usize] {
        &mut self.nodes
    }
}

impl TryFrom<Vec<usize>> for Route {
    type Error = RoutingError;

    fn try_from(nodes: Vec<usize>) -> Result<Self, Self::Error> {
        Route::from_nodes(nodes).ok_or(RoutingError::UnframedRoute)
    }
}

impl From<Route> for Vec<usize> {
    fn from(route: Route) -> Self {
        route.nodes
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}
