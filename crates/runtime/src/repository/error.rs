//! Error types raised by repository implementations.

use game_core::WarriorId;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("warrior repository lock was poisoned")]
    LockPoisoned,

    #[error("Warrior with id {0} already exists")]
    DuplicateId(WarriorId),

    #[error("no warrior id left after {0}")]
    IdSpaceExhausted(WarriorId),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
