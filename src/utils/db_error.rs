use crate::domain::MappingError;

/// Returns true if `e` is the engine rejecting a duplicate value.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Maps any sqlx failure that is not a uniqueness violation to a store error.
pub fn store_error(e: sqlx::Error) -> MappingError {
    MappingError::Store(e.to_string())
}
