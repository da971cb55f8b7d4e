use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;

#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("MongoDB at {url} did not answer ping: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: mongodb::error::Error,
    },
}

/// Build a client from `config` and ping the configured database once.
///
/// Startup fails on an unreachable deployment; there is no retry loop.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    let url = config.redacted_url();
    info!(%url, database = %config.database, "connecting to MongoDB");

    let mut options = ClientOptions::parse(&config.url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    options.app_name = config.app_name.clone();

    let client = Client::with_options(options)?;
    ping(&client, &config.database)
        .await
        .map_err(|source| MongoError::Unreachable { url, source })?;

    info!(database = %config.database, "MongoDB ready");
    Ok(client)
}

/// Round trip a `ping` command against `database`.
pub async fn ping(client: &Client, database: &str) -> Result<(), mongodb::error::Error> {
    client
        .database(database)
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}
