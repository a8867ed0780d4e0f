//! Error types for instance and solver configuration.

use std::fmt;

/// Errors raised while building a problem or configuring a run.
///
/// Everything here is detected before a population exists. Operators repair
/// their own drift and never return errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// Vehicle count outside `1..=customers`.
    InvalidVehicleCount {
        /// Requested number of vehicles.
        vehicles: usize,
        /// Number of customers in the instance.
        customers: usize,
    },
    /// The same customer id was supplied twice.
    DuplicateCustomer {
        /// The repeated id.
        id: usize,
    },
    /// Explicit matrix data does not form a square of the declared size.
    MatrixSizeMismatch {
        /// Expected number of entries (`size * size`).
        expected: usize,
        /// Number of entries supplied.
        actual: usize,
    },
    /// A matrix entry is negative, not finite, or a non-zero diagonal.
    InvalidDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// The offending value.
        value: f64,
    },
    /// `d[from][to]` and `d[to][from]` disagree.
    AsymmetricDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
    },
    /// A solver parameter is out of range.
    InvalidParameter {
        /// Parameter name as it appears in the configuration.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

impl RoutingError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVehicleCount {
                vehicles,
                customers,
            } => write!(
                f,
                "vehicle count {vehicles} must be between 1 and the number of customers ({customers})"
            ),
            Self::DuplicateCustomer { id } => write!(f, "customer id {id} appears more than once"),
            Self::MatrixSizeMismatch { expected, actual } => {
                write!(f, "distance matrix needs {expected} entries, got {actual}")
            }
            Self::InvalidDistance { from, to, value } => {
                write!(f, "distance {from}->{to} is invalid: {value}")
            }
            Self::AsymmetricDistance { from, to } => {
                write!(f, "distance {from}->{to} differs from {to}->{from}")
            }
            Self::InvalidParameter { name, reason } => write!(f, "invalid `{name}`: {reason}"),
        }
    }
}

impl std::error::Error for RoutingError {}
