//! Planar locations for the depot and customers.

use serde::{Deserialize, Serialize};

/// A point in the plane.
///
/// # Examples
///
/// ```
/// use evo_routing::models::Location;
///
/// let depot = Location::new(0.0, 0.0);
/// let c = Location::new(3.0, 4.0);
/// assert!((depot.distance_to(&c) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a location from coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_symmetric() {
        let a = Location::new(23.0, 45.0);
        let b = Location::new(55.0, 60.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_from_tuple() {
        let loc: Location = (1.5, -2.0).into();
        assert_eq!(loc.x(), 1.5);
        assert_eq!(loc.y(), -2.0);
    }
}
