//! Error type shared by the model, matrix, and evaluation layers.

use thiserror::Error;

/// Errors raised when problem data or matrices fail boundary validation.
///
/// The heuristics themselves never fail: once a [`Problem`](crate::models::Problem)
/// and [`CostMatrices`](crate::distance::CostMatrices) have been accepted, every
/// constructor and improver runs to completion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    #[error("vehicle count must be at least 1")]
    NoVehicles,

    #[error("vehicle capacity must be positive")]
    ZeroCapacity,

    #[error("customer {customer} has non-positive demand {demand}")]
    InvalidDemand { customer: String, demand: i32 },

    #[error("parameter `{name}` must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("invalid matrix entry {value} at ({row}, {col})")]
    InvalidMatrixEntry { row: usize, col: usize, value: f64 },

    #[error("matrix size mismatch: expected {expected}, got {actual}")]
    MatrixSizeMismatch { expected: usize, actual: usize },

    #[error("node {node} is out of bounds for a matrix of size {size}")]
    NodeOutOfBounds { node: usize, size: usize },

    #[error("route must start and end at the depot")]
    UnframedRoute,

    #[error("no construction algorithm configured")]
    NoAlgorithms,

    #[error("best index {best} is out of range for {solutions} solutions")]
    BestOutOfRange { best: usize, solutions: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
