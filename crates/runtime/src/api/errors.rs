//! Unified error types surfaced by the runtime API.
use game_core::WarriorId;
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Warrior not found")]
    WarriorNotFound(WarriorId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
