//! SQLite store implementations.
//!
//! Concrete implementations of domain store traits using SQLx. The schema
//! lives in `migrations/` and is embedded into the binary.

pub mod sqlite_mapping_repository;

pub use sqlite_mapping_repository::{PoolSettings, SqliteMappingStore};
