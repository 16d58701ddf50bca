//! Warrior records and the payloads that create and modify them.

mod payload;
mod warrior;

pub use payload::{WarriorDraft, WarriorPatch};
pub use warrior::{Warrior, WarriorId};
