//! Problem instance: depot, customers, and fleet size.

use std::collections::BTreeMap;

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};

use super::Location;

/// An immutable VRP instance.
///
/// Customers are kept in ascending id order. That order is the canonical
/// one: the customer with the smallest id sits at matrix index 1, the next
/// at 2, and so on, with the depot at index 0.
///
/// # Examples
///
/// ```
/// use evo_routing::models::{Location, ProblemInstance};
///
/// let instance = ProblemInstance::new(
///     Location::new(50.0, 50.0),
///     vec![(7, Location::new(46.0, 70.0)), (2, Location::new(42.0, 31.0))],
///     2,
/// ).unwrap();
///
/// assert_eq!(instance.customer_ids(), vec![2, 7]);
/// let dm = instance.distance_matrix();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(instance.to_customer_ids(&[vec![2], vec![1]]), vec![vec![7], vec![2]]);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    depot: Location,
    customers: BTreeMap<usize, Location>,
    num_vehicles: usize,
}

impl ProblemInstance {
    /// Builds an instance, failing on duplicate ids or a vehicle count
    /// outside `1..=customers`.
    pub fn new(
        depot: Location,
        customers: impl IntoIterator<Item = (usize, Location)>,
        num_vehicles: usize,
    ) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (id, loc) in customers {
            if map.insert(id, loc).is_some() {
                return Err(RoutingError::DuplicateCustomer { id });
            }
        }
        if num_vehicles == 0 || num_vehicles > map.len() {
            return Err(RoutingError::InvalidVehicleCount {
                vehicles: num_vehicles,
                customers: map.len(),
            });
        }
        Ok(Self {
            depot,
            customers: map,
            num_vehicles,
        })
    }

    /// Depot location.
    pub fn depot(&self) -> Location {
        self.depot
    }

    /// Number of customers (excluding depot).
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    /// Number of vehicles (routes) to plan.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Location of a customer by its caller-facing id.
    pub fn customer(&self, id: usize) -> Option<Location> {
        self.customers.get(&id).copied()
    }

    /// Customer ids in canonical order (matrix index `i + 1` holds `ids[i]`).
    pub fn customer_ids(&self) -> Vec<usize> {
        self.customers.keys().copied().collect()
    }

    /// All locations in matrix order: depot first, then customers.
    pub fn locations(&self) -> Vec<Location> {
        std::iter::once(self.depot)
            .chain(self.customers.values().copied())
            .collect()
    }

    /// Euclidean distance matrix over [`locations`](Self::locations).
    pub fn distance_matrix(&self) -> DistanceMatrix {
        DistanceMatrix::from_locations(&self.locations())
    }

    /// Maps routes of matrix indices (1..=N) back to caller customer ids.
    ///
    /// # Panics
    ///
    /// Panics if a route holds index 0 or an index above N.
    pub fn to_customer_ids(&self, routes: &[Vec<usize>]) -> Vec<Vec<usize>> {
        let ids = self.customer_ids();
        routes
            .iter()
            .map(|route| route.iter().map(|&idx| ids[idx - 1]).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Vec<(usize, Location)> {
        vec![
            (0, Location::new(23.0, 45.0)),
            (1, Location::new(55.0, 60.0)),
            (2, Location::new(42.0, 31.0)),
            (3, Location::new(67.0, 75.0)),
        ]
    }

    #[test]
    fn test_new_valid() {
        let inst = ProblemInstance::new(Location::new(50.0, 50.0), small(), 3).unwrap();
        assert_eq!(inst.num_customers(), 4);
        assert_eq!(inst.num_vehicles(), 3);
        assert_eq!(inst.customer_ids(), vec![0, 1, 2, 3]);
        assert_eq!(inst.customer(2), Some(Location::new(42.0, 31.0)));
        assert_eq!(inst.customer(9), None);
    }

    #[test]
    fn test_zero_vehicles_rejected() {
        let err = ProblemInstance::new(Location::new(0.0, 0.0), small(), 0).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidVehicleCount {
                vehicles: 0,
                customers: 4
            }
        );
    }

    #[test]
    fn test_too_many_vehicles_rejected() {
        let err = ProblemInstance::new(Location::new(0.0, 0.0), small(), 5).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidVehicleCount { vehicles: 5, .. }));
    }

    #[test]
    fn test_duplicate_customer_rejected() {
        let mut customers = small();
        customers.push((1, Location::new(0.0, 0.0)));
        let err = ProblemInstance::new(Location::new(0.0, 0.0), customers, 2).unwrap_err();
        assert_eq!(err, RoutingError::DuplicateCustomer { id: 1 });
    }

    #[test]
    fn test_canonical_order_and_matrix() {
        let inst = ProblemInstance::new(
            Location::new(0.0, 0.0),
            vec![(10, Location::new(0.0, 8.0)), (4, Location::new(3.0, 4.0))],
            1,
        )
        .unwrap();
        let dm = inst.distance_matrix();
        // id 4 -> index 1, id 10 -> index 2
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert_eq!(inst.to_customer_ids(&[vec![2, 1]]), vec![vec![10, 4]]);
    }
}
