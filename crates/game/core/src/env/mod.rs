//! Environment capabilities injected into warrior computations.

mod rng;

pub use rng::{FixedRoll, PcgRng, RngOracle};
