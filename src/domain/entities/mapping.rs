//! Mapping entity and the alias key it is stored under.

use std::fmt;

/// A non-empty short token identifying a stored URL.
///
/// Aliases are compared case-sensitively. The only way to obtain one is
/// through [`Alias::new`], so every `Alias` handed to a store is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias(String);

impl Alias {
    /// Wraps `value` as an alias, or returns `None` if it is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A persisted alias-to-URL mapping.
///
/// `id` is assigned by the store and is only meaningful for logging and
/// auditing; lookups always go through `alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_rejects_empty() {
        assert!(Alias::new("").is_none());
        assert!(Alias::new(String::new()).is_none());
    }

    #[test]
    fn test_alias_keeps_value() {
        let alias = Alias::new("Xk2pQ9").unwrap();
        assert_eq!(alias.as_str(), "Xk2pQ9");
        assert_eq!(alias.to_string(), "Xk2pQ9");
        assert_eq!(alias.into_inner(), "Xk2pQ9");
    }

    #[test]
    fn test_alias_is_case_sensitive() {
        assert_ne!(Alias::new("abc"), Alias::new("ABC"));
    }

    #[test]
    fn test_mapping_creation() {
        let mapping = Mapping::new(
            1,
            "Xk2pQ9".to_string(),
            "https://example.com/a".to_string(),
        );

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.alias, "Xk2pQ9");
        assert_eq!(mapping.url, "https://example.com/a");
    }
}
