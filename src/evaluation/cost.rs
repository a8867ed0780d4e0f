//! Travel cost of routes and decoded individuals.

use crate::distance::DistanceMatrix;
use crate::ga::{decode, Individual};

/// Distance of one route: depot → first, each leg, last → depot.
///
/// An empty route costs nothing.
///
/// # Examples
///
/// ```
/// use evo_routing::models::Location;
/// use evo_routing::distance::DistanceMatrix;
/// use evo_routing::evaluation::route_cost;
///
/// let dm = DistanceMatrix::from_locations(&[
///     Location::new(0.0, 0.0),
///     Location::new(1.0, 0.0),
///     Location::new(2.0, 0.0),
/// ]);
/// assert!((route_cost(&[1, 2], &dm) - 4.0).abs() < 1e-10);
/// assert_eq!(route_cost(&[], &dm), 0.0);
/// ```
pub fn route_cost(route: &[usize], distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return 0.0;
    };
    let legs: f64 = route
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum();
    distances.get(0, first) + legs + distances.get(last, 0)
}

/// Sum of [`route_cost`] over a list of routes.
pub fn routes_cost(routes: &[Vec<usize>], distances: &DistanceMatrix) -> f64 {
    routes.iter().map(|r| route_cost(r, distances)).sum()
}

/// Total distance of an individual decoded at its cut points into
/// `num_vehicles` routes. Lower is better.
pub fn total_cost(individual: &Individual, distances: &DistanceMatrix, num_vehicles: usize) -> f64 {
    routes_cost(&decode(individual, num_vehicles), distances)
}

/// Maximisation-style fitness: exactly `-total_cost`.
///
/// The solver itself minimises [`total_cost`] and never uses this value.
pub fn fitness(individual: &Individual, distances: &DistanceMatrix, num_vehicles: usize) -> f64 {
    -total_cost(individual, distances, num_vehicles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn line() -> DistanceMatrix {
        DistanceMatrix::from_locations(&[
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(2.0, 0.0),
            Location::new(3.0, 0.0),
            Location::new(0.0, 4.0),
        ])
    }

    #[test]
    fn test_route_cost_single() {
        let dm = line();
        assert!((route_cost(&[3], &dm) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_cost_reversed_equal() {
        let dm = line();
        let forward = route_cost(&[1, 4, 3], &dm);
        let backward = route_cost(&[3, 4, 1], &dm);
        assert!((forward - backward).abs() < 1e-10);
    }

    #[test]
    fn test_total_cost_two_routes() {
        let dm = line();
        let ind = Individual::new(vec![1, 2, 3, 4], vec![3]);
        // 0→1→2→3→0 = 6, 0→4→0 = 8
        assert!((total_cost(&ind, &dm, 2) - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_cost_empty_route_is_free() {
        let dm = line();
        let ind = Individual::new(vec![1, 2, 3, 4], vec![3, 3]);
        assert!((total_cost(&ind, &dm, 3) - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_cost_no_customers() {
        let dm = DistanceMatrix::new(1);
        let ind = Individual::from_perm(vec![]);
        assert_eq!(total_cost(&ind, &dm, 1), 0.0);
    }

    #[test]
    fn test_fitness_is_negated_cost() {
        let dm = line();
        let ind = Individual::new(vec![2, 4, 1, 3], vec![2]);
        assert_eq!(fitness(&ind, &dm, 2), -total_cost(&ind, &dm, 2));
    }
}
