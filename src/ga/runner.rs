//! Generational evolution loop.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SolverConfig;

use super::chromosome::Individual;
use super::problem::EncodingScheme;
use super::selection::select_parents;

/// Outcome of an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaResult {
    /// Best individual seen over the whole run.
    pub best: Individual,
    /// Cost of `best`.
    pub best_cost: f64,
    /// Best cost of each generation's population, one entry per generation.
    pub history: Vec<f64>,
}

/// Runs the classical genetic algorithm for a fixed number of generations.
pub struct GaRunner;

impl GaRunner {
    /// Evolves a random initial population under `scheme`.
    ///
    /// Each generation: tournament-selected parent pairs are recombined with
    /// probability `crossover_rate` (cloned otherwise), both children are
    /// mutated, and the buffer is cut to `population_size`. With elitism the
    /// worst newcomer is replaced by the previous generation's best, which
    /// keeps `history` non-increasing.
    ///
    /// `config` is expected to be validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use evo_routing::config::SolverConfig;
    /// use evo_routing::distance::DistanceMatrix;
    /// use evo_routing::ga::{CutPointScheme, GaRunner};
    /// use evo_routing::models::Location;
    /// use rand::SeedableRng;
    ///
    /// let dm = DistanceMatrix::from_locations(&[
    ///     Location::new(0.0, 0.0),
    ///     Location::new(1.0, 0.0),
    ///     Location::new(2.0, 0.0),
    ///     Location::new(0.0, 1.0),
    /// ]);
    /// let config = SolverConfig::default()
    ///     .with_population_size(10)
    ///     .with_generations(20);
    /// let scheme = CutPointScheme::new(&dm, 2, &config);
    /// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
    ///
    /// let result = GaRunner::run(&scheme, &config, &mut rng);
    /// assert_eq!(result.history.len(), 20);
    /// assert!(result.best_cost <= result.history[0]);
    /// ```
    pub fn run<S: EncodingScheme, R: Rng>(scheme: &S, config: &SolverConfig, rng: &mut R) -> GaResult {
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| scheme.create_individual(rng))
            .collect();
        let mut costs = evaluate_all(scheme, &population);

        let first = fittest(&costs);
        let mut best = population[first].clone();
        let mut best_cost = costs[first];
        let mut history = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            let elite = fittest(&costs);
            let mut offspring = breed(scheme, &population, &costs, config, rng);
            let mut offspring_costs = evaluate_all(scheme, &offspring);
            if config.elitism {
                replace_worst(
                    &mut offspring,
                    &mut offspring_costs,
                    &population[elite],
                    costs[elite],
                );
            }
            population = offspring;
            costs = offspring_costs;

            let gen_best = fittest(&costs);
            history.push(costs[gen_best]);
            if costs[gen_best] < best_cost {
                best = population[gen_best].clone();
                best_cost = costs[gen_best];
            }
            log_generation(config, generation, costs[gen_best], best_cost);
        }

        GaResult {
            best,
            best_cost,
            history,
        }
    }
}

/// Builds exactly `population_size` offspring from `parents`.
pub(crate) fn breed<S: EncodingScheme, R: Rng>(
    scheme: &S,
    parents: &[Individual],
    costs: &[f64],
    config: &SolverConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let size = config.population_size;
    let mut offspring = Vec::with_capacity(size + 1);
    while offspring.len() < size {
        let (i, j) = select_parents(costs, config.tournament_size, rng);
        let (p1, p2) = (&parents[i], &parents[j]);
        let (mut c1, mut c2) = if rng.random_bool(config.crossover_rate) {
            (scheme.crossover(p1, p2, rng), scheme.crossover(p2, p1, rng))
        } else {
            (p1.clone(), p2.clone())
        };
        scheme.mutate(&mut c1, rng);
        scheme.mutate(&mut c2, rng);
        offspring.push(c1);
        offspring.push(c2);
    }
    offspring.truncate(size);
    offspring
}

pub(crate) fn evaluate_all<S: EncodingScheme>(scheme: &S, population: &[Individual]) -> Vec<f64> {
    population.iter().map(|ind| scheme.evaluate(ind)).collect()
}

/// Index of the first minimal cost.
pub(crate) fn fittest(costs: &[f64]) -> usize {
    let mut best = 0;
    for (i, &c) in costs.iter().enumerate().skip(1) {
        if c < costs[best] {
            best = i;
        }
    }
    best
}

/// Overwrites the first maximal-cost individual with `elite`.
pub(crate) fn replace_worst(
    population: &mut [Individual],
    costs: &mut [f64],
    elite: &Individual,
    elite_cost: f64,
) {
    let mut worst = 0;
    for (i, &c) in costs.iter().enumerate().skip(1) {
        if c > costs[worst] {
            worst = i;
        }
    }
    population[worst] = elite.clone();
    costs[worst] = elite_cost;
}

pub(crate) fn log_generation(config: &SolverConfig, generation: usize, gen_best: f64, best: f64) {
    if config.log_convergence {
        info!(
            "generation {}: best {:.4} (overall {:.4})",
            generation, gen_best, best
        );
    } else {
        debug!(
            "generation {}: best {:.4} (overall {:.4})",
            generation, gen_best, best
        );
    }
}
