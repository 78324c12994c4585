//! SQLite implementation of the mapping store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::Alias;
use crate::domain::repositories::MappingStore;
use crate::domain::{MappingError, MappingResult};
use crate::utils::db_error::{is_unique_violation, store_error};

/// Connection pool settings for [`SqliteMappingStore::connect`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// SQLite store for alias-to-URL mappings.
///
/// The `url` table carries a `UNIQUE` constraint on `alias`; inserts rely on
/// it to reject duplicates, so there is no read-before-write window.
pub struct SqliteMappingStore {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingStore {
    /// Creates a store over an existing pool whose schema is already set up.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `database_url` and
    /// brings its schema up to date.
    ///
    /// Schema setup is idempotent and runs on every call.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Store`] if the URL is malformed, the database
    /// cannot be opened, or migrations fail.
    pub async fn connect(database_url: &str, settings: PoolSettings) -> MappingResult<Self> {
        let connect_options = SqliteConnectOptions::from_str(database_url)
            .map_err(store_error)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout);

        // Every connection to an in-memory database sees its own empty
        // database, so the pool must hold exactly one connection forever.
        if is_in_memory(database_url) {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(store_error)?;

        Self::init_schema(&pool).await?;

        Ok(Self::new(Arc::new(pool)))
    }

    /// Creates the `url` table and its alias index if they do not exist.
    pub async fn init_schema(pool: &SqlitePool) -> MappingResult<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| MappingError::Store(format!("schema setup failed: {e}")))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl MappingStore for SqliteMappingStore {
    async fn create(&self, url: &str, alias: &Alias) -> MappingResult<i64> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias.as_str())
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(err) if is_unique_violation(&err) => Err(MappingError::Conflict(alias.to_string())),
            Err(err) => Err(store_error(err)),
        }
    }

    async fn resolve(&self, alias: &str) -> MappingResult<String> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(store_error)?;

        url.ok_or_else(|| MappingError::NotFound(alias.to_string()))
    }
}
