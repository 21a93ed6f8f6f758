//! CVRP problem instance.

use serde::{Deserialize, Serialize};

use super::{Customer, Depot};
use crate::error::{Result, RoutingError};

/// Matrix index of the depot.
pub const DEPOT: usize = 0;

/// Maps a customer's position in [`Problem::customers`] to its matrix index.
///
/// ```
/// use cvrp_engine::models::node_index;
///
/// assert_eq!(node_index(0), 1);
/// assert_eq!(node_index(4), 5);
/// ```
pub fn node_index(customer_position: usize) -> usize {
    customer_position + 1
}

/// A capacitated vehicle routing problem instance.
///
/// Holds the depot, the ordered customers, and the homogeneous fleet
/// description. Validated on construction and immutable afterwards, so the
/// heuristics never re-check it.
///
/// # Examples
///
/// ```
/// use cvrp_engine::models::{Customer, Depot, Problem};
///
/// let problem = Problem::new(
///     Depot::new(0.0, 0.0),
///     vec![
///         Customer::new("a", 0.0, 1.0, 4),
///         Customer::new("b", 1.0, 0.0, 6),
///     ],
///     2,
///     10,
/// )
/// .unwrap();
/// assert_eq!(problem.num_customers(), 2);
/// assert_eq!(problem.total_demand(), 10);
/// assert_eq!(problem.total_capacity(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProblemData", into = "ProblemData")]
pub struct Problem {
    depot: Depot,
    customers: Vec<Customer>,
    vehicle_count: usize,
    vehicle_capacity: i32,
    avg_speed: Option<f64>,
    fuel_consumption: Option<f64>,
}

impl Problem {
    /// Creates a problem, validating vehicle count, capacity, and demands.
    pub fn new(
        depot: Depot,
        customers: Vec<Customer>,
        vehicle_count: usize,
        vehicle_capacity: i32,
    ) -> Result<Self> {
        if vehicle_count == 0 {
            return Err(RoutingError::NoVehicles);
        }
        if vehicle_capacity <= 0 {
            return Err(RoutingError::ZeroCapacity);
        }
        if let Some(c) = customers.iter().find(|c| c.demand() <= 0) {
            return Err(RoutingError::InvalidDemand {
                customer: c.id().to_string(),
                demand: c.demand(),
            });
        }
        Ok(Self {
            depot,
            customers,
            vehicle_count,
            vehicle_capacity,
            avg_speed: None,
            fuel_consumption: None,
        })
    }

    /// Sets the average vehicle speed (distance units per hour).
    pub fn with_avg_speed(mut self, speed: f64) -> Result<Self> {
        self.avg_speed = Some(non_negative("avg_speed", speed)?);
        Ok(self)
    }

    /// Sets fuel consumption in volume per 100 distance units.
    pub fn with_fuel_consumption(mut self, rate: f64) -> Result<Self> {
        self.fuel_consumption = Some(non_negative("fuel_consumption", rate)?);
        Ok(self)
    }

    /// The depot.
    pub fn depot(&self) -> &Depot {
        &self.depot
    }

    /// Customers in input order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    /// Number of matrix rows/columns this problem requires.
    pub fn num_nodes(&self) -> usize {
        self.customers.len() + 1
    }

    /// Matrix indices of all customers, in input order.
    pub fn customer_nodes(&self) -> impl Iterator<Item = usize> {
        (0..self.customers.len()).map(node_index)
    }

    /// Inverse of [`node_index`]. `None` for the depot or an unknown node.
    pub fn customer_position(&self, node: usize) -> Option<usize> {
        if node == DEPOT || node > self.customers.len() {
            None
        } else {
            Some(node - 1)
        }
    }

    /// Customer at the given matrix index.
    pub fn customer_at(&self, node: usize) -> Option<&Customer> {
        self.customer_position(node).map(|p| &self.customers[p])
    }

    /// Demand of a node; zero for the depot.
    ///
    /// # Panics
    ///
    /// Panics if `node` is neither the depot nor a customer index.
    pub fn demand(&self, node: usize) -> i32 {
        if node == DEPOT {
            0
        } else {
            self.customers[node - 1].demand()
        }
    }

    /// Maximum number of routes.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Per-vehicle capacity.
    pub fn vehicle_capacity(&self) -> i32 {
        self.vehicle_capacity
    }

    /// Average speed, if known.
    pub fn avg_speed(&self) -> Option<f64> {
        self.avg_speed
    }

    /// Fuel consumption per 100 distance units, if tracked.
    pub fn fuel_consumption(&self) -> Option<f64> {
        self.fuel_consumption
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> i64 {
        self.customers.iter().map(|c| i64::from(c.demand())).sum()
    }

    /// Combined capacity of the whole fleet.
    pub fn total_capacity(&self) -> i64 {
        self.vehicle_count as i64 * i64::from(self.vehicle_capacity)
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RoutingError::InvalidParameter { name, value })
    }
}

/// Unvalidated wire form of [`Problem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProblemData {
    depot: Depot,
    customers: Vec<Customer>,
    vehicle_count: usize,
    vehicle_capacity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avg_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fuel_consumption: Option<f64>,
}

impl TryFrom<ProblemData> for Problem {
    type Error = RoutingError;

    fn try_from(data: ProblemData) -> Result<Self> {
        let mut problem = Problem::new(
            data.depot,
            data.customers,
            data.vehicle_count,
            data.vehicle_capacity,
        )?;
        if let Some(speed) = data.avg_speed {
            problem = problem.with_avg_speed(speed)?;
        }
        if let Some(rate) = data.fuel_consumption {
            problem = problem.with_fuel_consumption(rate)?;
        }
        Ok(problem)
    }
}

impl From<Problem> for ProblemData {
    fn from(p: Problem) -> Self {
        Self {
            depot: p.depot,
            customers: p.customers,
            vehicle_count: p.vehicle_count,
            vehicle_capacity: p.vehicle_capacity,
            avg_speed: p.avg_speed,
            fuel_consumption: p.fuel_consumption,
        }
    }
}
