//! Paired distance and duration matrices.

use super::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::models::Problem;

/// The distance and duration matrices for one solve.
///
/// Construction is the boundary at which malformed matrices are rejected;
/// afterwards the heuristics index into them freely.
///
/// # Examples
///
/// ```
/// use cvrp_engine::distance::{CostMatrices, DistanceMatrix};
///
/// let distance = DistanceMatrix::from_rows(vec![vec![0.0, 2.0], vec![2.0, 0.0]]).unwrap();
/// let duration = DistanceMatrix::from_rows(vec![vec![0.0, 90.0], vec![90.0, 0.0]]).unwrap();
/// let matrices = CostMatrices::new(distance, duration).unwrap();
/// assert_eq!(matrices.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrices {
    distance: DistanceMatrix,
    duration: DistanceMatrix,
}

impl CostMatrices {
    /// Pairs two matrices of equal size, validating both.
    pub fn new(distance: DistanceMatrix, duration: DistanceMatrix) -> Result<Self> {
        if distance.size() != duration.size() {
            return Err(RoutingError::MatrixSizeMismatch {
                expected: distance.size(),
                actual: duration.size(),
            });
        }
        distance.validate()?;
        duration.validate()?;
        Ok(Self { distance, duration })
    }

    /// Like [`new`](Self::new), but also requires one row per problem node.
    pub fn for_problem(
        problem: &Problem,
        distance: DistanceMatrix,
        duration: DistanceMatrix,
    ) -> Result<Self> {
        let matrices = Self::new(distance, duration)?;
        matrices.check_covers(problem)?;
        Ok(matrices)
    }

    /// Fails unless the matrices have exactly one row per problem node.
    pub fn check_covers(&self, problem: &Problem) -> Result<()> {
        if self.size() != problem.num_nodes() {
            return Err(RoutingError::MatrixSizeMismatch {
                expected: problem.num_nodes(),
                actual: self.size(),
            });
        }
        Ok(())
    }

    /// Travel distance matrix.
    pub fn distance(&self) -> &DistanceMatrix {
        &self.distance
    }

    /// Travel duration matrix.
    pub fn duration(&self) -> &DistanceMatrix {
        &self.duration
    }

    /// Number of nodes covered.
    pub fn size(&self) -> usize {
        self.distance.size()
    }
}
