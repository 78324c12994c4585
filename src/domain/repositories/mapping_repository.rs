//! Store trait for alias-to-URL mappings.

use crate::domain::entities::Alias;
use crate::domain::error::MappingResult;
use async_trait::async_trait;

/// Durable persistence of mappings with alias uniqueness.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingStore`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Persists a new mapping and returns its assigned id.
    ///
    /// Uniqueness of `alias` is enforced by the storage engine in the same
    /// statement as the insert, so concurrent writers proposing the same
    /// alias cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Conflict`](crate::domain::MappingError::Conflict)
    /// if the alias is already bound.
    ///
    /// Returns [`MappingError::Store`](crate::domain::MappingError::Store) on
    /// any other storage failure.
    async fn create(&self, url: &str, alias: &Alias) -> MappingResult<i64>;

    /// Looks up the URL bound to `alias` (exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::NotFound`](crate::domain::MappingError::NotFound)
    /// if nothing is bound to the alias.
    ///
    /// Returns [`MappingError::Store`](crate::domain::MappingError::Store) on
    /// storage failures.
    async fn resolve(&self, alias: &str) -> MappingResult<String>;
}
