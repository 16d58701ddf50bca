//! Repository layer for warrior records.
//!
//! The store is process-lifetime state with no durability. Handlers only see
//! the [`WarriorRepository`] trait, so a persistent backend can replace
//! [`InMemoryWarriorRepo`] without touching them.

mod error;
mod memory;
mod policy;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryWarriorRepo;
pub use policy::IdPolicy;
pub use traits::WarriorRepository;
