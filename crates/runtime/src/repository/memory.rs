//! In-memory WarriorRepository, the process-lifetime store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use game_core::{Warrior, WarriorDraft, WarriorId, WarriorPatch};

use crate::repository::{IdPolicy, RepositoryError, Result, WarriorRepository};

/// Ordered list of warriors behind a single lock.
///
/// Lookups are a linear scan and the first match wins. Each operation holds
/// one guard from scan to mutation, so concurrent creates cannot hand out the
/// same id and concurrent updates cannot lose writes.
pub struct InMemoryWarriorRepo {
    warriors: RwLock<Vec<Warrior>>,
    policy: IdPolicy,
}

impl InMemoryWarriorRepo {
    /// Create a new empty repository using `policy` for new ids.
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            warriors: RwLock::new(Vec::new()),
            policy,
        }
    }

    /// Create a repository pre-populated with `warriors`, kept in the given order.
    pub fn with_warriors(policy: IdPolicy, warriors: Vec<Warrior>) -> Self {
        Self {
            warriors: RwLock::new(warriors),
            policy,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Warrior>>> {
        self.warriors
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Warrior>>> {
        self.warriors
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)
    }

    fn position(warriors: &[Warrior], id: WarriorId) -> Option<usize> {
        warriors.iter().position(|warrior| warrior.id == id)
    }

    fn next_id(warriors: &[Warrior]) -> Result<WarriorId> {
        match warriors.iter().map(|warrior| warrior.id).max() {
            None => Ok(WarriorId::FIRST),
            Some(max) => max.next().ok_or(RepositoryError::IdSpaceExhausted(max)),
        }
    }

    fn assign_id(&self, warriors: &[Warrior], requested: Option<WarriorId>) -> Result<WarriorId> {
        let id = match (self.policy, requested) {
            (IdPolicy::Client, Some(id)) => id,
            _ => Self::next_id(warriors)?,
        };

        if Self::position(warriors, id).is_some() {
            return Err(RepositoryError::DuplicateId(id));
        }
        Ok(id)
    }
}

impl Default for InMemoryWarriorRepo {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

impl WarriorRepository for InMemoryWarriorRepo {
    fn create(&self, mut draft: WarriorDraft) -> Result<Warrior> {
        let mut warriors = self.write()?;
        let id = self.assign_id(&warriors, draft.id.take())?;
        let warrior = draft.into_warrior(id);
        warriors.push(warrior.clone());
        Ok(warrior)
    }

    fn list(&self) -> Result<Vec<Warrior>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: WarriorId) -> Result<Option<Warrior>> {
        let warriors = self.read()?;
        Ok(warriors.iter().find(|warrior| warrior.id == id).cloned())
    }

    fn update(&self, id: WarriorId, patch: WarriorPatch) -> Result<Option<Warrior>> {
        let mut warriors = self.write()?;
        Ok(warriors
            .iter_mut()
            .find(|warrior| warrior.id == id)
            .map(|warrior| {
                warrior.apply(patch);
                warrior.clone()
            }))
    }

    fn delete(&self, id: WarriorId) -> Result<Option<Warrior>> {
        let mut warriors = self.write()?;
        Ok(Self::position(&warriors, id).map(|index| warriors.remove(index)))
    }

    fn names(&self) -> Result<Vec<String>> {
        let warriors = self.read()?;
        Ok(warriors.iter().map(|warrior| warrior.name.clone()).collect())
    }
}
