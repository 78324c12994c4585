//! Application layer services implementing business logic.
//!
//! Services consume store traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Mapping creation and resolution

pub mod services;
