//! Dense cost matrix.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A dense n×n cost matrix stored in row-major order.
///
/// Used for both travel distance and travel duration. Index 0 is the depot,
/// indices 1..n are customers in input order.
///
/// # Examples
///
/// ```
/// use cvrp_engine::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 2), 4.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a matrix from an explicit row-major n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a matrix from nested rows, as delivered by matrix services.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(RoutingError::NotSquare {
                    row: index,
                    len: row.len(),
                    expected: size,
                });
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.size && to < self.size,
            "node out of bounds: ({from}, {to}) for matrix of size {}",
            self.size
        );
        self.data[from * self.size + to]
    }

    /// Sets the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, value: f64) {
        assert!(
            from < self.size && to < self.size,
            "node out of bounds: ({from}, {to}) for matrix of size {}",
            self.size
        );
        self.data[from * self.size + to] = value;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `node` is a valid index into this matrix.
    pub fn contains(&self, node: usize) -> bool {
        node < self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks that every entry is finite and non-negative and the diagonal is zero.
    pub fn validate(&self) -> Result<()> {
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.get(row, col);
                let bad = !value.is_finite() || value < 0.0 || (row == col && value != 0.0);
                if bad {
                    return Err(RoutingError::InvalidMatrixEntry { row, col, value });
                }
            }
        }
        Ok(())
    }

    /// Returns the nearest of `candidates` as seen from `from`.
    ///
    /// Ties go to the candidate yielded first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(
        &self,
        from: usize,
        candidates: impl IntoIterator<Item = usize>,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for c in candidates {
            let d = self.get(from, c);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = RoutingError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(m: DistanceMatrix) -> Self {
        if m.size == 0 {
            return Vec::new();
        }
        m.data.chunks(m.size).map(<[f64]>::to_vec).collect()
    }
}
