//! Warrior records and the game rules computed from them.
//!
//! `game-core` owns the character data model and the derived attributes
//! (health state, affordability, ability eligibility, critical damage). It
//! performs no I/O; randomness is injected through [`env::RngOracle`] so the
//! same rules run against a live generator or a fixed test roll.
pub mod combat;
pub mod env;
pub mod state;
pub mod stats;

pub use combat::DamageRoll;
pub use env::{FixedRoll, PcgRng, RngOracle};
pub use state::{Warrior, WarriorDraft, WarriorId, WarriorPatch};
pub use stats::{
    LOW_HEALTH_THRESHOLD, SPECIAL_ABILITY_MIN_AGILITY, SPECIAL_ABILITY_MIN_INTELLECT,
    SPECIAL_ABILITY_MIN_STRENGTH, WarriorInfo,
};
