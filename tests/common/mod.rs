#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;
use url_alias_service::application::services::MappingService;
use url_alias_service::infrastructure::persistence::{PoolSettings, SqliteMappingStore};
use url_alias_service::routes;
use url_alias_service::state::{AppState, BasicCredentials};
use url_alias_service::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// `Authorization` value for `admin:secret`.
pub const AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";
/// `Authorization` value for `admin:wrong`.
pub const WRONG_AUTH_HEADER: &str = "Basic YWRtaW46d3Jvbmc=";

pub async fn memory_store() -> SqliteMappingStore {
    SqliteMappingStore::connect("sqlite::memory:", PoolSettings::default())
        .await
        .unwrap()
}

/// A database file under the system temp dir, removed on drop.
pub struct TempDb {
    pub path: PathBuf,
}

impl TempDb {
    pub fn new(name: &str) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "url-alias-{}-{}-{}.db",
            name,
            std::process::id(),
            n
        ));
        let db = Self { path };
        db.cleanup();
        db
    }

    pub fn url(&self) -> String {
        format!("sqlite://{}", self.path.display())
    }

    pub async fn connect(&self) -> SqliteMappingStore {
        SqliteMappingStore::connect(&self.url(), PoolSettings::default())
            .await
            .unwrap()
    }

    fn cleanup(&self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        self.cleanup();
    }
}

pub async fn insert_mapping(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
        .bind(url)
        .bind(alias)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Hands out a fixed sequence of aliases, then empty strings.
pub struct ScriptedGenerator {
    aliases: Mutex<VecDeque<String>>,
}

impl ScriptedGenerator {
    pub fn new(aliases: &[&str]) -> Self {
        Self {
            aliases: Mutex::new(aliases.iter().map(|a| a.to_string()).collect()),
        }
    }
}

impl AliasGenerator for ScriptedGenerator {
    fn generate(&self, _length: usize) -> String {
        self.aliases.lock().unwrap().pop_front().unwrap_or_default()
    }
}

pub fn create_test_state(store: SqliteMappingStore) -> AppState {
    let service = MappingService::new(Arc::new(store), Arc::new(RandomAliasGenerator::new()));

    AppState::new(
        Arc::new(service),
        BasicCredentials::new(TEST_USER, TEST_PASSWORD),
    )
}

/// Router over a fresh in-memory store, plus a handle on its pool for seeding.
pub async fn test_app() -> (Router, SqlitePool) {
    let store = memory_store().await;
    let pool = store.pool().clone();
    (routes::router(create_test_state(store)), pool)
}
