//! Storage contract for warrior records.

use game_core::{Warrior, WarriorDraft, WarriorId, WarriorPatch};

use super::Result;

/// Store of warrior records, keyed by [`WarriorId`].
///
/// Lookups report an unknown id as `Ok(None)`; errors are reserved for the
/// store itself failing or refusing a write. Implementations must make each
/// call atomic with respect to concurrent callers.
pub trait WarriorRepository: Send + Sync {
    /// Insert a warrior built from `draft`, choosing its id per the store's policy.
    fn create(&self, draft: WarriorDraft) -> Result<Warrior>;

    /// All warriors, in insertion order.
    fn list(&self) -> Result<Vec<Warrior>>;

    /// Find a warrior by id.
    fn get(&self, id: WarriorId) -> Result<Option<Warrior>>;

    /// Merge `patch` onto the warrior with `id` and return the merged record.
    fn update(&self, id: WarriorId, patch: WarriorPatch) -> Result<Option<Warrior>>;

    /// Remove the warrior with `id` and return it.
    fn delete(&self, id: WarriorId) -> Result<Option<Warrior>>;

    /// Names of all warriors, in insertion order.
    fn names(&self) -> Result<Vec<String>> {
        Ok(self.list()?.into_iter().map(|warrior| warrior.name).collect())
    }
}
