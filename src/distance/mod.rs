//! Distance and travel time matrices.
//!
//! The engine consumes precomputed matrices; obtaining them is left to the
//! caller.

mod matrices;
mod matrix;

pub use matrices::CostMatrices;
pub use matrix::DistanceMatrix;
