//! Encoding schemes: the contract the evolution loops run against.
//!
//! A scheme knows how to create, decode, score, recombine and mutate an
//! [`Individual`]. Two schemes ship with the crate:
//!
//! - [`CutPointScheme`] — permutation plus cut points; order crossover paired
//!   with cut-point crossover; swap, jitter and route relocation mutation.
//! - [`FixedSplitScheme`] — permutation only, decoded by [`fixed_split`];
//!   order crossover and swap mutation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SolverConfig;
use crate::distance::DistanceMatrix;
use crate::evaluation::routes_cost;

use super::chromosome::{decode, fixed_split, Individual};
use super::operators::{
    cut_point_crossover, jitter_mutation, order_crossover, route_mutation, swap_mutation,
};

/// Problem-specific operations used by the evolution loops.
pub trait EncodingScheme {
    /// Distance matrix the scheme scores against.
    fn distances(&self) -> &DistanceMatrix;

    /// Number of routes an individual decodes into.
    fn num_vehicles(&self) -> usize;

    /// Number of customers, taken from the matrix.
    fn num_customers(&self) -> usize {
        self.distances().num_customers()
    }

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Individual;

    /// Splits an individual into routes of customer indices.
    fn decode(&self, individual: &Individual) -> Vec<Vec<usize>>;

    /// Total travel distance. Lower is better.
    fn evaluate(&self, individual: &Individual) -> f64 {
        routes_cost(&self.decode(individual), self.distances())
    }

    /// Produces one child from two parents; `parent1` contributes the kept
    /// segment.
    fn crossover<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Individual;

    /// Mutates an individual in place.
    fn mutate<R: Rng>(&self, individual: &mut Individual, rng: &mut R);
}

/// Permutation + cut-point encoding.
///
/// # Examples
///
/// ```
/// use evo_routing::config::SolverConfig;
/// use evo_routing::distance::DistanceMatrix;
/// use evo_routing::ga::{CutPointScheme, EncodingScheme, Individual};
/// use evo_routing::models::Location;
///
/// let dm = DistanceMatrix::from_locations(&[
///     Location::new(0.0, 0.0),
///     Location::new(1.0, 0.0),
///     Location::new(2.0, 0.0),
///     Location::new(0.0, 4.0),
/// ]);
/// let scheme = CutPointScheme::new(&dm, 2, &SolverConfig::default());
/// let ind = Individual::new(vec![1, 2, 3], vec![2]);
/// // 0→1→2→0 = 4, 0→3→0 = 8
/// assert!((scheme.evaluate(&ind) - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct CutPointScheme<'a> {
    distances: &'a DistanceMatrix,
    num_vehicles: usize,
    perm_mutation_rate: f64,
    cut_mutation_rate: f64,
    route_mutation_rate: f64,
}

impl<'a> CutPointScheme<'a> {
    /// Creates the scheme with mutation rates from `config`.
    pub fn new(distances: &'a DistanceMatrix, num_vehicles: usize, config: &SolverConfig) -> Self {
        Self {
            distances,
            num_vehicles,
            perm_mutation_rate: config.perm_mutation_rate,
            cut_mutation_rate: config.cut_mutation_rate,
            route_mutation_rate: config.route_mutation_rate,
        }
    }
}

impl EncodingScheme for CutPointScheme<'_> {
    fn distances(&self) -> &DistanceMatrix {
        self.distances
    }

    fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Individual {
        Individual::random(self.num_customers(), self.num_vehicles, rng)
    }

    fn decode(&self, individual: &Individual) -> Vec<Vec<usize>> {
        decode(individual, self.num_vehicles)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Individual {
        // perm and cuts are recombined together so the child stays consistent
        let perm = order_crossover(parent1.perm(), parent2.perm(), rng);
        let cuts = cut_point_crossover(
            parent1.cuts(),
            parent2.cuts(),
            perm.len(),
            self.num_vehicles,
            rng,
        );
        Individual::new(perm, cuts)
    }

    fn mutate<R: Rng>(&self, individual: &mut Individual, rng: &mut R) {
        let n = individual.len();
        swap_mutation(individual.perm_mut(), self.perm_mutation_rate, rng);
        jitter_mutation(individual.cuts_mut(), self.cut_mutation_rate, n, rng);
        route_mutation(individual, self.num_vehicles, self.route_mutation_rate, rng);
    }
}

/// Permutation-only encoding decoded by a balanced fixed split.
#[derive(Debug, Clone)]
pub struct FixedSplitScheme<'a> {
    distances: &'a DistanceMatrix,
    num_vehicles: usize,
    perm_mutation_rate: f64,
}

impl<'a> FixedSplitScheme<'a> {
    /// Creates the scheme with the swap rate from `config`.
    pub fn new(distances: &'a DistanceMatrix, num_vehicles: usize, config: &SolverConfig) -> Self {
        Self {
            distances,
            num_vehicles,
            perm_mutation_rate: config.perm_mutation_rate,
        }
    }
}

impl EncodingScheme for FixedSplitScheme<'_> {
    fn distances(&self) -> &DistanceMatrix {
        self.distances
    }

    fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Individual {
        let mut perm: Vec<usize> = (1..=self.num_customers()).collect();
        perm.shuffle(rng);
        Individual::from_perm(perm)
    }

    fn decode(&self, individual: &Individual) -> Vec<Vec<usize>> {
        fixed_split(individual.perm(), self.num_vehicles)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Individual {
        Individual::from_perm(order_crossover(parent1.perm(), parent2.perm(), rng))
    }

    fn mutate<R: Rng>(&self, individual: &mut Individual, rng: &mut R) {
        swap_mutation(individual.perm_mut(), self.perm_mutation_rate, rng);
    }
}
