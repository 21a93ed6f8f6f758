//! Local search operators for improving CVRP routes.
//!
//! - [`two_opt_improve`] — Intra-route 2-opt segment reversal

mod two_opt;

pub use two_opt::{two_opt_improve, two_opt_improve_with_limit};
