//! Core domain entities.
//!
//! - [`Mapping`] - A persisted alias-to-URL pair with its store-assigned id
//! - [`Alias`] - The non-empty lookup key of a mapping

pub mod mapping;

pub use mapping::{Alias, Mapping};
