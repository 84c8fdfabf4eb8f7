use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{retry, retry_with_backoff, RetryConfig};

/// Error type for MongoDB connection handling
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect to MongoDB and verify the connection with a ping.
pub async fn connect(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Connecting to MongoDB at {}", config.url);

    let mut options = ClientOptions::parse(&config.url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .database(config.database())
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Connected to MongoDB");
    Ok(client)
}

/// Alias kept for symmetry with the other connectors.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    connect(config).await
}

/// Connect with automatic retry and exponential backoff.
///
/// Useful for transient network failures during startup, e.g. when the
/// database container is still coming up.
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    match retry_config {
        Some(rc) => retry_with_backoff(|| connect(config), rc).await,
        None => retry(|| connect(config)).await,
    }
}

/// Ping-based health check; true when the server answers.
pub async fn check_health(client: &Client, database: &str) -> bool {
    client
        .database(database)
        .run_command(doc! { "ping": 1 })
        .await
        .is_ok()
}
