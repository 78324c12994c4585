//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`MappingStore`] - Alias-to-URL mapping persistence

pub mod mapping_repository;

pub use mapping_repository::MappingStore;

#[cfg(test)]
pub use mapping_repository::MockMappingStore;
