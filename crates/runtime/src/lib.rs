//! Runtime services for the warrior roster.
//!
//! This crate wires the game rules from `game-core` to a store and a random
//! source. Consumers build a [`WarriorService`] once and call it from request
//! handlers.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the service, its builder and configuration
//! - [`api`] exposes the error types downstream clients interact with
//! - [`repository`] provides the store contract and the in-memory store
//! - [`oracle`] provides the process-wide random source
pub mod api;
pub mod oracle;
pub mod repository;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use oracle::{ThreadRngOracle, rng_from_seed};
pub use repository::{
    IdPolicy, InMemoryWarriorRepo, RepositoryError, WarriorRepository,
};
pub use runtime::{RuntimeConfig, WarriorService, WarriorServiceBuilder};
