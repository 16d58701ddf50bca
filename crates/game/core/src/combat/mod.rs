//! Critical hits and damage output.

mod critical;

pub use critical::DamageRoll;
