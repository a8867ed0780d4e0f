//! Cost evaluation of routes and individuals.
//!
//! All functions are pure: same input, same cost, no randomness.

mod cost;

pub use cost::{fitness, route_cost, routes_cost, total_cost};
