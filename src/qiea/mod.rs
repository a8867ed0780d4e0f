//! Quantum-inspired evolutionary algorithm (QIEA).
//!
//! - [`QuantumIndividual`] — amplitude vector, measurement, rotation
//! - [`QieaRunner`] — amplitude-guided search refined by classical operators

mod amplitude;
mod runner;

pub use amplitude::QuantumIndividual;
pub use runner::QieaRunner;
