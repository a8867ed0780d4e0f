//! Problem data consumed by the solver.
//!
//! A [`ProblemInstance`] holds the depot, customer coordinates keyed by
//! caller-facing ids, and the fleet size. The solver itself only sees the
//! [`DistanceMatrix`](crate::distance::DistanceMatrix) built from it.

mod instance;
mod location;

pub use instance::ProblemInstance;
pub use location::Location;
