//! Helper functions shared across layers.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`db_error`] - Classification of sqlx errors

pub mod alias_generator;
pub mod db_error;
