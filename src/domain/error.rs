//! Errors reported by the mapping store and mapping service.

use thiserror::Error;

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// The closed set of failures a mapping operation can report.
///
/// Callers branch on the variant; the payload is informational.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The alias is already bound to a mapping.
    #[error("alias already exists: {0}")]
    Conflict(String),

    /// No mapping is bound to the alias.
    #[error("alias not found: {0}")]
    NotFound(String),

    /// Any other storage failure (I/O, connectivity, schema, decoding).
    #[error("storage failure: {0}")]
    Store(String),
}

impl MappingError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MappingError::Conflict("abc".into()).to_string(),
            "alias already exists: abc"
        );
        assert_eq!(
            MappingError::NotFound("abc".into()).to_string(),
            "alias not found: abc"
        );
        assert_eq!(
            MappingError::Store("disk full".into()).to_string(),
            "storage failure: disk full"
        );
    }

    #[test]
    fn test_variant_predicates() {
        assert!(MappingError::Conflict("a".into()).is_conflict());
        assert!(!MappingError::Conflict("a".into()).is_not_found());
        assert!(MappingError::NotFound("a".into()).is_not_found());
        assert!(!MappingError::Store("x".into()).is_conflict());
    }
}
