//! Advisory demand-versus-capacity check.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Problem;

/// Outcome of comparing total customer demand with total fleet capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandCheck {
    /// Sum of all customer demands.
    pub total_demand: i64,
    /// `vehicle_count × vehicle_capacity`.
    pub total_capacity: i64,
}

impl DemandCheck {
    /// Returns `true` if the fleet can, in aggregate, carry every demand.
    pub fn is_feasible(&self) -> bool {
        self.total_demand <= self.total_capacity
    }

    /// Demand that cannot be carried by the fleet; zero when feasible.
    pub fn shortfall(&self) -> i64 {
        (self.total_demand - self.total_capacity).max(0)
    }
}

/// Compares total demand against total capacity.
///
/// Emits a warning when demand exceeds capacity but never fails; the
/// constructors still run and leave the excess customers unserved.
///
/// # Examples
///
/// ```
/// use cvrp_engine::evaluation::check_demand;
/// use cvrp_engine::models::{Customer, Depot, Problem};
///
/// let problem = Problem::new(
///     Depot::new(0.0, 0.0),
///     vec![Customer::new("a", 0.0, 0.0, 8), Customer::new("b", 0.0, 0.0, 8)],
///     1,
///     10,
/// )
/// .unwrap();
/// let check = check_demand(&problem);
/// assert!(!check.is_feasible());
/// assert_eq!(check.shortfall(), 6);
/// ```
pub fn check_demand(problem: &Problem) -> DemandCheck {
    let check = DemandCheck {
        total_demand: problem.total_demand(),
        total_capacity: problem.total_capacity(),
    };
    if !check.is_feasible() {
        warn!(
            total_demand = check.total_demand,
            total_capacity = check.total_capacity,
            "total demand exceeds fleet capacity; some customers will not be served"
        );
    }
    check
}
