//! # evo-routing
//!
//! Evolutionary search for multi-vehicle routes from a single depot.
//!
//! A solution is a permutation of all customers plus `V - 1` cut points that
//! split it into `V` routes. The crate evolves populations of such solutions
//! with tournament selection, order crossover, cut-point crossover, and
//! swap / jitter / route-relocation mutation, or alternatively with a
//! quantum-inspired amplitude search. Runs are driven by a single seeded
//! generator and are reproducible.
//!
//! ## Modules
//!
//! - [`models`] — Problem instance and locations
//! - [`distance`] — Distance matrix (depot at index 0)
//! - [`evaluation`] — Route and solution cost
//! - [`ga`] — Encoding, operators, selection and the generational loop
//! - [`qiea`] — Quantum-inspired variant
//! - [`config`] — Solver configuration
//! - [`solver`] — [`solve`] entry point
//!
//! ## Example
//!
//! ```
//! use evo_routing::config::SolverConfig;
//! use evo_routing::models::{Location, ProblemInstance};
//! use evo_routing::solve_instance;
//!
//! let instance = ProblemInstance::new(
//!     Location::new(50.0, 50.0),
//!     vec![
//!         (0, Location::new(23.0, 45.0)),
//!         (1, Location::new(55.0, 60.0)),
//!         (2, Location::new(42.0, 31.0)),
//!         (3, Location::new(67.0, 75.0)),
//!         (4, Location::new(33.0, 20.0)),
//!         (5, Location::new(59.0, 39.0)),
//!     ],
//!     2,
//! )
//! .unwrap();
//!
//! let config = SolverConfig::default().with_generations(40).with_seed(7);
//! let result = solve_instance(&instance, &config).unwrap();
//! let routes = instance.to_customer_ids(&result.routes);
//! assert_eq!(routes.len(), 2);
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod models;
pub mod qiea;
pub mod solver;

pub use error::{Result, RoutingError};
pub use solver::{solve, solve_instance, SolveResult};
