use crate::app_config::AppConfig;
use crate::persistence::JsonStorage;
use crate::store::TripStore;
use crate::web::WebState;
use std::sync::Arc;
use tokio::task;
use tracing::info;

mod analytics;
mod app_config;
mod bucketer;
mod domain;
mod geo;
mod gps;
mod persistence;
mod poller;
mod store;
mod web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load());
    info!("✅  Loaded configuration");

    let client = gps::new_client(&config)?;

    let storage = Arc::new(JsonStorage::new(config.storage().data_dir()));
    let store = TripStore::load(storage, config.schedule().clone()).await;
    info!("✅  Restored trip state");

    let poll_store = store.clone();
    let poll_config = config.clone();
    task::spawn(async move {
        poller::poll_loop(client, poll_config, poll_store).await;
    });
    info!("✅  Initialized poller");

    let state = WebState {
        store,
        plan: config.trip().clone(),
        schedule: config.schedule().clone(),
    };

    info!("🚚 {} is up and running", env!("CARGO_PKG_NAME"));
    web::start_web_server(config.web().bind_address(), state).await?;

    Ok(())
}
