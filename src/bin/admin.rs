//! CLI administration tool for url-alias-service.
//!
//! Creates and resolves mappings directly against the database, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Map a URL to a generated alias
//! cargo run --bin admin -- create https://example.com
//!
//! # Map a URL to a chosen alias
//! cargo run --bin admin -- create https://example.com --alias ex
//!
//! # Look up an alias
//! cargo run --bin admin -- resolve ex
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `STORAGE_PATH` (required): SQLite database location
//! - `ALIAS_LENGTH`, `ALIAS_RETRY_ATTEMPTS` (optional): as for the server

use url_alias_service::api::dto::save::SaveRequest;
use url_alias_service::application::services::MappingService;
use url_alias_service::config::{AliasSettings, Config};
use url_alias_service::domain::MappingError;
use url_alias_service::infrastructure::persistence::{PoolSettings, SqliteMappingStore};
use url_alias_service::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing url-alias-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Map a URL to an alias
    Create {
        /// Target URL
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },
    /// Print the URL stored under an alias
    Resolve {
        /// Alias to look up
        alias: String,
    },
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and schema
    Check,
}

type AdminService = MappingService<SqliteMappingStore, RandomAliasGenerator>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let store = SqliteMappingStore::connect(&database_url, PoolSettings::default())
        .await
        .context("Failed to open database")?;

    match cli.command {
        Commands::Create { url, alias } => create_mapping(service(store)?, url, alias).await?,
        Commands::Resolve { alias } => resolve_alias(service(store)?, &alias).await?,
        Commands::Db { action } => handle_db_action(action, &store).await?,
    }

    Ok(())
}

/// Wires the service with the same alias settings the server would use.
fn service(store: SqliteMappingStore) -> Result<AdminService> {
    let settings = AliasSettings::from_env()?;

    Ok(
        MappingService::new(Arc::new(store), Arc::new(RandomAliasGenerator::new()))
            .with_alias_length(settings.length)
            .with_conflict_policy(settings.conflict_policy()),
    )
}

async fn create_mapping(service: AdminService, url: String, alias: Option<String>) -> Result<()> {
    println!("{}", "🔗 Create mapping".bright_blue().bold());
    println!();

    let request = match SaveRequest::checked(url, alias) {
        Ok(request) => request,
        Err(message) => {
            println!("{} {}", "❌ Invalid input:".red(), message.bright_white());
            anyhow::bail!("invalid input: {message}")
        }
    };

    match service.create(request.url, request.alias).await {
        Ok(mapping) => {
            println!("{}", "✅ Mapping created".green().bold());
            println!("  Alias: {}", mapping.alias.bright_yellow().bold());
            println!("  URL:   {}", mapping.url.cyan());
            println!("  ID:    {}", mapping.id);
            println!();
            Ok(())
        }
        Err(MappingError::Conflict(alias)) => {
            println!("{} {}", "❌ Alias already exists:".red(), alias.bright_white());
            anyhow::bail!("alias already exists")
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create mapping: {}", e)),
    }
}

async fn resolve_alias(service: AdminService, alias: &str) -> Result<()> {
    match service.resolve(alias).await {
        Ok(url) => {
            println!("{} → {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(MappingError::NotFound(_)) => {
            println!("{} {}", "⚠️  No mapping for".yellow(), alias.bright_white());
            anyhow::bail!("alias not found")
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve alias: {}", e)),
    }
}

async fn handle_db_action(action: DbAction, store: &SqliteMappingStore) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(store.pool()).await?;

            let mappings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
                .fetch_one(store.pool())
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Mappings: {}", mappings.to_string().bright_white());
        }
    }

    Ok(())
}
