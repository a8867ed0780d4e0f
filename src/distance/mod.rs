//! Pairwise travel costs between the depot and customers.

mod matrix;

pub use matrix::{DistanceMatrix, SYMMETRY_TOLERANCE};
