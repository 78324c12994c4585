//! Domain layer containing business entities and store contracts.
//!
//! - [`entities`] - Core data structures ([`entities::Mapping`], [`entities::Alias`])
//! - [`repositories`] - Store trait definitions
//! - [`error`] - The typed failures every mapping operation reports
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::{MappingError, MappingResult};
