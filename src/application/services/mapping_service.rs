//! Mapping creation and resolution service.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use tokio_retry::RetryIf;
use tracing::{debug, error, info};

use crate::domain::entities::{Alias, Mapping};
use crate::domain::repositories::MappingStore;
use crate::domain::{MappingError, MappingResult};
use crate::utils::alias_generator::{AliasGenerator, DEFAULT_ALIAS_LENGTH};

/// What [`MappingService::create`] does when the store reports a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Return the conflict to the caller unchanged.
    #[default]
    Propagate,
    /// Retry auto-generated aliases with a fresh token, at most `attempts`
    /// extra times. Caller-requested aliases always propagate.
    RetryGenerated { attempts: usize },
}

impl ConflictPolicy {
    /// Builds a policy from a retry count, where `0` means propagate.
    pub fn from_attempts(attempts: usize) -> Self {
        if attempts == 0 {
            Self::Propagate
        } else {
            Self::RetryGenerated { attempts }
        }
    }
}

/// Creates and resolves alias-to-URL mappings.
///
/// Picks an alias (requested or generated), persists it through the store,
/// and reports store outcomes unchanged. URL syntax validation and
/// authentication happen before calls reach this service.
pub struct MappingService<S: MappingStore, G: AliasGenerator> {
    store: Arc<S>,
    generator: Arc<G>,
    alias_length: usize,
    conflict_policy: ConflictPolicy,
}

impl<S: MappingStore, G: AliasGenerator> MappingService<S, G> {
    /// Creates a service that generates aliases of the default length and
    /// propagates conflicts.
    pub fn new(store: Arc<S>, generator: Arc<G>) -> Self {
        Self {
            store,
            generator,
            alias_length: DEFAULT_ALIAS_LENGTH,
            conflict_policy: ConflictPolicy::Propagate,
        }
    }

    /// Sets the length of generated aliases.
    pub fn with_alias_length(mut self, alias_length: NonZeroUsize) -> Self {
        self.alias_length = alias_length.get();
        self
    }

    pub fn with_conflict_policy(mut self, conflict_policy: ConflictPolicy) -> Self {
        self.conflict_policy = conflict_policy;
        self
    }

    pub fn alias_length(&self) -> usize {
        self.alias_length
    }

    /// Binds `url` to `requested_alias`, or to a generated alias if none (or
    /// an empty one) is requested.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Conflict`] if the alias is taken. With
    /// [`ConflictPolicy::RetryGenerated`], a generated alias is only reported
    /// as conflicting once every retry has also collided.
    ///
    /// Returns [`MappingError::Store`] on storage failures.
    pub async fn create(
        &self,
        url: String,
        requested_alias: Option<String>,
    ) -> MappingResult<Mapping> {
        let result = match requested_alias.and_then(Alias::new) {
            Some(alias) => self.store_mapping(&url, alias).await,
            None => self.store_generated(&url).await,
        };

        match &result {
            Ok(mapping) => {
                metrics::counter!("mappings_created_total").increment(1);
                info!(id = mapping.id, alias = %mapping.alias, "mapping created");
            }
            Err(MappingError::Conflict(alias)) => {
                metrics::counter!("mapping_conflicts_total").increment(1);
                info!(%alias, "alias already exists");
            }
            Err(e) => error!(error = %e, "failed to create mapping"),
        }

        result
    }

    /// Returns the URL bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::NotFound`] if the alias is unbound, or
    /// [`MappingError::Store`] on storage failures.
    pub async fn resolve(&self, alias: &str) -> MappingResult<String> {
        let result = self.store.resolve(alias).await;

        let outcome = match &result {
            Ok(_) => "found",
            Err(MappingError::NotFound(_)) => "not_found",
            Err(_) => "error",
        };
        metrics::counter!("alias_resolutions_total", "outcome" => outcome).increment(1);

        match &result {
            Ok(url) => debug!(%alias, %url, "alias resolved"),
            Err(MappingError::NotFound(_)) => debug!(%alias, "alias not found"),
            Err(e) => error!(%alias, error = %e, "failed to resolve alias"),
        }

        result
    }

    async fn store_mapping(&self, url: &str, alias: Alias) -> MappingResult<Mapping> {
        let id = self.store.create(url, &alias).await?;
        Ok(Mapping::new(id, alias.into_inner(), url.to_string()))
    }

    async fn store_generated(&self, url: &str) -> MappingResult<Mapping> {
        let attempts = match self.conflict_policy {
            ConflictPolicy::Propagate => 0,
            ConflictPolicy::RetryGenerated { attempts } => attempts,
        };

        // Collisions are rare and unrelated to load, so retries are immediate.
        let strategy = std::iter::repeat_n(Duration::ZERO, attempts);

        RetryIf::start(
            strategy,
            move || async move {
                let alias = self.generate_alias()?;
                let result = self.store_mapping(url, alias).await;
                if let Err(MappingError::Conflict(alias)) = &result {
                    debug!(%alias, "generated alias collided");
                }
                result
            },
            MappingError::is_conflict,
        )
        .await
    }

    fn generate_alias(&self) -> MappingResult<Alias> {
        let token = self.generator.generate(self.alias_length);
        Alias::new(token)
            .ok_or_else(|| MappingError::Store("alias generator returned an empty token".into()))
    }
}
