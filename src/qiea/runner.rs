//! Quantum-inspired evolution loop.

use rand::Rng;

use crate::config::SolverConfig;
use crate::ga::runner::{breed, evaluate_all, fittest, log_generation, replace_worst};
use crate::ga::{EncodingScheme, FixedSplitScheme, GaResult, Individual};

use super::amplitude::QuantumIndividual;

/// Runs the quantum-inspired evolutionary algorithm (QIEA).
pub struct QieaRunner;

impl QieaRunner {
    /// Evolves a population of amplitude vectors.
    ///
    /// Every generation, each amplitude vector is rotated toward the best
    /// permutation found so far and measured into a classical population.
    /// The rotation target is the overall best, which may be a bred
    /// offspring rather than a measured individual. That population is then
    /// bred with the scheme's selection, crossover and mutation exactly like
    /// [`GaRunner`](crate::ga::GaRunner); with elitism the previous
    /// generation's best replaces the worst offspring.
    ///
    /// Measurement yields bare permutations, so every individual is decoded
    /// with the balanced [`fixed_split`](crate::ga::fixed_split).
    ///
    /// # Examples
    ///
    /// ```
    /// use evo_routing::config::{SolverConfig, Variant};
    /// use evo_routing::distance::DistanceMatrix;
    /// use evo_routing::ga::FixedSplitScheme;
    /// use evo_routing::models::Location;
    /// use evo_routing::qiea::QieaRunner;
    /// use rand::SeedableRng;
    ///
    /// let dm = DistanceMatrix::from_locations(&[
    ///     Location::new(0.0, 0.0),
    ///     Location::new(1.0, 0.0),
    ///     Location::new(2.0, 0.0),
    ///     Location::new(0.0, 1.0),
    ///     Location::new(0.0, 2.0),
    /// ]);
    /// let config = SolverConfig::default()
    ///     .with_variant(Variant::Quantum)
    ///     .with_population_size(10)
    ///     .with_generations(15);
    /// let scheme = FixedSplitScheme::new(&dm, 2, &config);
    /// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(5);
    ///
    /// let result = QieaRunner::run(&scheme, &config, &mut rng);
    /// assert_eq!(result.history.len(), 15);
    /// assert_eq!(result.best.len(), 4);
    /// ```
    pub fn run<R: Rng>(scheme: &FixedSplitScheme<'_>, config: &SolverConfig, rng: &mut R) -> GaResult {
        let n = scheme.num_customers();
        let noise = config.quantum.measurement_noise;
        let step = config.quantum.rotation_step;

        let mut register: Vec<QuantumIndividual> = (0..config.population_size)
            .map(|_| QuantumIndividual::new(n))
            .collect();
        let mut population = measure_all(&register, noise, rng);
        let mut costs = evaluate_all(scheme, &population);

        let first = fittest(&costs);
        let mut best = population[first].clone();
        let mut best_cost = costs[first];
        let mut history = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            for q in register.iter_mut() {
                q.rotate_towards(best.perm(), step);
            }
            let measured = measure_all(&register, noise, rng);
            let measured_costs = evaluate_all(scheme, &measured);
            let m = fittest(&measured_costs);
            if measured_costs[m] < best_cost {
                best = measured[m].clone();
                best_cost = measured_costs[m];
            }

            let elite = fittest(&costs);
            let mut offspring = breed(scheme, &measured, &measured_costs, config, rng);
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

fn measure_all<R: Rng>(register: &[QuantumIndividual], noise: f64, rng: &mut R) -> Vec<Individual> {
    register
        .iter()
        .map(|q| Individual::from_perm(q.measure(noise, rng)))
        .collect()
}
