//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::infrastructure::persistence::SqliteMappingStore;
use crate::utils::alias_generator::RandomAliasGenerator;

/// The service wiring used by the HTTP layer and the admin CLI.
pub type AppMappingService = MappingService<SqliteMappingStore, RandomAliasGenerator>;

/// Username and password accepted on protected routes.
#[derive(Clone)]
pub struct BasicCredentials {
    pub user: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, user: &str, password: Option<&str>) -> bool {
        self.user == user && password == Some(self.password.as_str())
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<AppMappingService>,
    pub credentials: Arc<BasicCredentials>,
}

impl AppState {
    pub fn new(mapping_service: Arc<AppMappingService>, credentials: BasicCredentials) -> Self {
        Self {
            mapping_service,
            credentials: Arc::new(credentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_match() {
        let creds = BasicCredentials::new("admin", "secret");

        assert!(creds.matches("admin", Some("secret")));
        assert!(!creds.matches("admin", Some("wrong")));
        assert!(!creds.matches("admin", None));
        assert!(!creds.matches("other", Some("secret")));
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = BasicCredentials::new("admin", "secret");
        assert!(!format!("{creds:?}").contains("secret"));
    }
}
