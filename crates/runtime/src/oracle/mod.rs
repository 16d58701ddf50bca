//! Runtime-provided capabilities for the game rules.

mod rng;

pub use rng::{ThreadRngOracle, rng_from_seed};
