//! Runs the store webhook and REST server.
//!
//! Configuration comes from the environment; see [`maitre::config`]. Without
//! `DATABASE_URL` the server keeps everything in memory.

use std::sync::Arc;

use maitre::app::{Stores, build_state};
use maitre::config::AppConfig;
use maitre::postgres::build_pool;
use maitre::server;
use maitre::whatsapp::adapters::cloud_api::CloudApiNotifier;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let stores = if let Some(url) = config.database_url.as_deref() {
        info!("Connecting to PostgreSQL");
        let pool = tokio::task::spawn_blocking({
            let url = url.to_owned();
            move || build_pool(&url)
        })
        .await??;
        Stores::postgres(&pool)
    } else {
        warn!("DATABASE_URL is not set; using in-memory stores");
        Stores::in_memory()
    };

    if config.admins.is_empty() {
        warn!("WHATSAPP_ADMIN_PHONES is empty; every admin command will be refused");
    }
    if config.cloud_api.access_token.is_none() {
        warn!("WHATSAPP_ACCESS_TOKEN is not set; replies will not be delivered");
    }

    let notifier = Arc::new(CloudApiNotifier::new(config.cloud_api.clone()));
    let state = build_state(&config, stores, notifier);

    server::serve(state, config.port).await?;
    Ok(())
}
