//! Genetic algorithm components for vehicle routing.
//!
//! - [`Individual`] — permutation + cut-point chromosome, [`decode`]d into routes
//! - [`operators`] — order / cut-point crossover; swap, jitter and route mutation
//! - [`tournament_select`] — tournament selection over population costs
//! - [`EncodingScheme`] — the create / decode / evaluate / crossover / mutate
//!   contract, implemented by [`CutPointScheme`] and [`FixedSplitScheme`]
//! - [`GaRunner`] — the generational loop with optional elitism

mod chromosome;
pub mod operators;
mod problem;
pub(crate) mod runner;
mod selection;

pub use chromosome::{decode, fixed_split, random_cuts, settle_cuts, Individual};
pub use problem::{CutPointScheme, EncodingScheme, FixedSplitScheme};
pub use runner::{GaResult, GaRunner};
pub use selection::{select_parents, tournament_select, MAX_RESELECT};
