//! Depot and customer types.

use serde::{Deserialize, Serialize};

/// The single depot every route starts from and returns to.
///
/// Its coordinates only feed the external distance oracle; the heuristics
/// address the depot through matrix index 0.
///
/// # Examples
///
/// ```
/// use cvrp_engine::models::Depot;
///
/// let depot = Depot::new(52.52, 13.40);
/// assert_eq!(depot.lat(), 52.52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    lat: f64,
    lon: f64,
}

impl Depot {
    /// Creates a depot at the given coordinates.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// A customer with a location and a demand to be served.
///
/// Customers are identified by a caller-supplied string; their position in
/// [`Problem::customers`](super::Problem::customers) determines their matrix
/// index (see [`node_index`](super::node_index)).
///
/// # Examples
///
/// ```
/// use cvrp_engine::models::Customer;
///
/// let c = Customer::new("C-17", 52.50, 13.35, 4);
/// assert_eq!(c.id(), "C-17");
/// assert_eq!(c.demand(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    lat: f64,
    lon: f64,
    demand: i32,
}

impl Customer {
    /// Creates a new customer.
    ///
    /// Demand is validated when the customer becomes part of a
    /// [`Problem`](super::Problem).
    pub fn new(id: impl Into<String>, lat: f64, lon: f64, demand: i32) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            demand,
        }
    }

    /// Caller-supplied identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Units the visiting vehicle must carry.
    pub fn demand(&self) -> i32 {
        self.demand
    }
}
