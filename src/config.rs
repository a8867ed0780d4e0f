//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Which search procedure and encoding to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Permutation plus cut points, all operators.
    #[default]
    CutPoints,
    /// Permutation only, decoded by a fixed balanced split.
    FixedSplit,
    /// Quantum-inspired amplitude search refined by the perm-only operators.
    Quantum,
}

/// Parameters specific to the quantum-inspired variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantumConfig {
    /// Amplitude change per gene and generation (`delta_theta`).
    pub rotation_step: f64,
    /// Upper bound of the uniform noise added before sorting amplitudes.
    pub measurement_noise: f64,
}

impl Default for QuantumConfig {
    fn default() -> Self {
        Self {
            rotation_step: 0.05,
            measurement_noise: 0.02,
        }
    }
}

/// Configuration of a solver run.
///
/// Every field has a default, so partial JSON or TOML documents deserialize.
///
/// # Examples
///
/// ```
/// use evo_routing::config::{SolverConfig, Variant};
///
/// let config = SolverConfig::default()
///     .with_population_size(30)
///     .with_generations(50)
///     .with_variant(Variant::FixedSplit)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.tournament_size, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Search procedure and encoding.
    pub variant: Variant,
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations to run.
    pub generations: usize,
    /// Tournament size `k`.
    pub tournament_size: usize,
    /// Probability that a parent pair is recombined rather than cloned.
    pub crossover_rate: f64,
    /// Per-position swap probability.
    pub perm_mutation_rate: f64,
    /// Per-cut jitter probability.
    pub cut_mutation_rate: f64,
    /// Per-individual probability of a route relocation.
    pub route_mutation_rate: f64,
    /// Carry the previous generation's best into the next one.
    pub elitism: bool,
    /// Seed of the run's random generator.
    pub seed: u64,
    /// Log every generation's best cost at `info` level instead of `debug`.
    pub log_convergence: bool,
    /// Quantum-inspired variant parameters.
    pub quantum: QuantumConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            population_size: 50,
            generations: 100,
            tournament_size: 3,
            crossover_rate: 0.8,
            perm_mutation_rate: 0.1,
            cut_mutation_rate: 0.1,
            route_mutation_rate: 0.2,
            elitism: true,
            seed: 42,
            log_convergence: false,
            quantum: QuantumConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Sets the variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation budget.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-position swap probability.
    pub fn with_perm_mutation_rate(mut self, rate: f64) -> Self {
        self.perm_mutation_rate = rate;
        self
    }

    /// Sets the per-cut jitter probability.
    pub fn with_cut_mutation_rate(mut self, rate: f64) -> Self {
        self.cut_mutation_rate = rate;
        self
    }

    /// Sets the route relocation probability.
    pub fn with_route_mutation_rate(mut self, rate: f64) -> Self {
        self.route_mutation_rate = rate;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables per-generation `info` logging.
    pub fn with_log_convergence(mut self, log: bool) -> Self {
        self.log_convergence = log;
        self
    }

    /// Sets the quantum-inspired parameters.
    pub fn with_quantum(mut self, quantum: QuantumConfig) -> Self {
        self.quantum = quantum;
        self
    }

    /// Checks parameter ranges.
    ///
    /// Instance-dependent checks (vehicle count against customer count) are
    /// done by the solver entry point.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(RoutingError::parameter("population_size", "must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(RoutingError::parameter("tournament_size", "must be at least 1"));
        }
        let rates = [
            ("crossover_rate", self.crossover_rate),
            ("perm_mutation_rate", self.perm_mutation_rate),
            ("cut_mutation_rate", self.cut_mutation_rate),
            ("route_mutation_rate", self.route_mutation_rate),
        ];
        for (name, rate) in rates {
            check_probability(name, rate)?;
        }
        let step = self.quantum.rotation_step;
        if !(step.is_finite() && step > 0.0 && step <= 1.0) {
            return Err(RoutingError::parameter(
                "quantum.rotation_step",
                format!("must be within (0, 1], got {step}"),
            ));
        }
        let noise = self.quantum.measurement_noise;
        if !(noise.is_finite() && noise >= 0.0) {
            return Err(RoutingError::parameter(
                "quantum.measurement_noise",
                format!("must be finite and non-negative, got {noise}"),
            ));
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(RoutingError::parameter(
            name,
            format!("must be within [0, 1], got {rate}"),
        ))
    }
}
