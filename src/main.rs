use anyhow::Result;
use url_alias_service::{config, logging, server};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    logging::init(config.app_env, config.log_level.as_deref())?;
    config.print_summary();

    server::run(config).await
}
