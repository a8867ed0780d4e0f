//! Dense distance matrix.

use crate::error::{Result, RoutingError};
use crate::models::Location;

/// Largest difference tolerated between `d[i][j]` and `d[j][i]`.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A dense n×n distance matrix stored in row-major order.
///
/// Index 0 is the depot; indices 1..n are customers in canonical order.
///
/// # Examples
///
/// ```
/// use evo_routing::models::Location;
/// use evo_routing::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(3.0, 4.0),
///     Location::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.num_customers(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix; `locations[0]` is the depot.
    pub fn from_locations(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Fails if the data length doesn't match `size * size`, any entry is
    /// negative or non-finite, the diagonal is not zero, or the grid is not
    /// symmetric within [`SYMMETRY_TOLERANCE`].
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(RoutingError::MatrixSizeMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }
        if let Some(pos) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(RoutingError::InvalidDistance {
                from: pos / size,
                to: pos % size,
                value: data[pos],
            });
        }
        let dm = Self { data, size };
        for i in 0..size {
            let d = dm.get(i, i);
            if d != 0.0 {
                return Err(RoutingError::InvalidDistance {
                    from: i,
                    to: i,
                    value: d,
                });
            }
            for j in (i + 1)..size {
                if (dm.get(i, j) - dm.get(j, i)).abs() > SYMMETRY_TOLERANCE {
                    return Err(RoutingError::AsymmetricDistance { from: i, to: j });
                }
            }
        }
        Ok(dm)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub(crate) fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix (depot included).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of customers, i.e. `size - 1`; zero for an empty matrix.
    pub fn num_customers(&self) -> usize {
        self.size.saturating_sub(1)
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<Location> {
        vec![
            Location::new(0.0, 0.0),
            Location::new(3.0, 4.0),
            Location::new(0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_locations() {
        let dm = DistanceMatrix::from_locations(&sample_locations());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_locations(&sample_locations());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
        assert_eq!(dm.num_customers(), 1);
    }

    #[test]
    fn test_from_data_invalid_size() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            RoutingError::MatrixSizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_data_negative_entry() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, -2.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::InvalidDistance { from: 1, to: 0, .. }
        ));
    }

    #[test]
    fn test_from_data_nan_entry() {
        let err = DistanceMatrix::from_data(2, vec![0.0, f64::NAN, 1.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::InvalidDistance { from: 0, to: 1, .. }
        ));
    }

    #[test]
    fn test_from_data_nonzero_diagonal() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0, 7.0]).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidDistance {
                from: 1,
                to: 1,
                value: 7.0
            }
        );
    }

    #[test]
    fn test_from_data_asymmetric() {
        let data = vec![0.0, 1.0, 9.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0];
        let err = DistanceMatrix::from_data(3, data).unwrap_err();
        assert_eq!(err, RoutingError::AsymmetricDistance { from: 0, to: 2 });
    }

    #[test]
    fn test_from_data_within_tolerance() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0 + 1e-12, 0.0]).expect("valid");
        assert!(dm.is_symmetric(SYMMETRY_TOLERANCE));
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DistanceMatrix::new(0);
        assert_eq!(dm.num_customers(), 0);
    }
}
