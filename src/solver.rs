//! Solver entry points.
//!
//! [`solve`] validates its inputs, seeds a [`ChaCha8Rng`] from the
//! configuration and dispatches on [`Variant`]. The same matrix, vehicle
//! count and configuration always produce the same result.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{SolverConfig, Variant};
use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::ga::{CutPointScheme, EncodingScheme, FixedSplitScheme, GaResult, GaRunner, Individual};
use crate::models::ProblemInstance;
use crate::qiea::QieaRunner;

/// Best solution of a run together with its convergence history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResult {
    /// Best individual found.
    pub best: Individual,
    /// Total distance of `best`.
    pub best_cost: f64,
    /// Best cost per generation.
    pub history: Vec<f64>,
    /// `best` decoded into routes of matrix indices (customers are 1..=N).
    pub routes: Vec<Vec<usize>>,
}

/// Runs the configured search over a distance matrix.
///
/// The number of customers is `distances.size() - 1`. Fails before any
/// population is created if the configuration is invalid or the vehicle
/// count is outside `1..=N`.
///
/// # Examples
///
/// ```
/// use evo_routing::config::SolverConfig;
/// use evo_routing::distance::DistanceMatrix;
/// use evo_routing::models::Location;
/// use evo_routing::solve;
///
/// let dm = DistanceMatrix::from_locations(&[
///     Location::new(50.0, 50.0),
///     Location::new(23.0, 45.0),
///     Location::new(55.0, 60.0),
///     Location::new(42.0, 31.0),
///     Location::new(67.0, 75.0),
/// ]);
/// let config = SolverConfig::default()
///     .with_population_size(20)
///     .with_generations(30)
///     .with_seed(1);
///
/// let result = solve(&dm, 2, &config).unwrap();
/// assert_eq!(result.routes.len(), 2);
/// assert_eq!(result.history.len(), 30);
///
/// assert!(solve(&dm, 5, &config).is_err());
/// ```
pub fn solve(
    distances: &DistanceMatrix,
    num_vehicles: usize,
    config: &SolverConfig,
) -> Result<SolveResult> {
    config.validate()?;
    let num_customers = distances.num_customers();
    if num_vehicles == 0 || num_vehicles > num_customers {
        return Err(RoutingError::InvalidVehicleCount {
            vehicles: num_vehicles,
            customers: num_customers,
        });
    }
    if config.tournament_size == 1 {
        warn!("tournament size 1 is uniform random selection; the search has no selection pressure");
    }

    info!(
        "solving {} customers with {} vehicles ({:?}, population {}, {} generations, seed {})",
        num_customers,
        num_vehicles,
        config.variant,
        config.population_size,
        config.generations,
        config.seed
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let result = match config.variant {
        Variant::CutPoints => {
            let scheme = CutPointScheme::new(distances, num_vehicles, config);
            finish(&scheme, GaRunner::run(&scheme, config, &mut rng))
        }
        Variant::FixedSplit => {
            let scheme = FixedSplitScheme::new(distances, num_vehicles, config);
            finish(&scheme, GaRunner::run(&scheme, config, &mut rng))
        }
        Variant::Quantum => {
            let scheme = FixedSplitScheme::new(distances, num_vehicles, config);
            finish(&scheme, QieaRunner::run(&scheme, config, &mut rng))
        }
    };

    info!(
        "best cost {:.4} after {} generations",
        result.best_cost,
        result.history.len()
    );
    Ok(result)
}

/// Runs [`solve`] on an instance's Euclidean matrix and vehicle count.
///
/// Routes in the result are matrix indices; map them back with
/// [`ProblemInstance::to_customer_ids`].
pub fn solve_instance(instance: &ProblemInstance, config: &SolverConfig) -> Result<SolveResult> {
    solve(&instance.distance_matrix(), instance.num_vehicles(), config)
}

fn finish<S: EncodingScheme>(scheme: &S, result: GaResult) -> SolveResult {
    let routes = scheme.decode(&result.best);
    SolveResult {
        best: result.best,
        best_cost: result.best_cost,
        history: result.history,
        routes,
    }
}
