use crate::app_config::AppConfig;
use crate::gps;
use crate::store::{RecordError, TripStore};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, instrument, warn};

/// Polls the GPS provider on a fixed interval and records each sample. The
/// loop is sequential, so a slow upstream call delays the next tick instead
/// of overlapping it; every failure is confined to its own cycle and the
/// last-known state keeps being served.
#[instrument(skip_all)]
pub async fn poll_loop(client: Client, config: Arc<AppConfig>, store: TripStore) {
    let mut interval = time::interval(config.poller().interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("🛰 Polling GPS provider every {:?}", config.poller().interval());
    loop {
        interval.tick().await;
        poll_once(&client, &config, &store).await;
    }
}

/// A single poll cycle: fetch with a short bounded backoff, then record.
async fn poll_once(client: &Client, config: &AppConfig, store: &TripStore) {
    let strategy = ExponentialBackoff::from_millis(500)
        .factor(2)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(2);

    let result = Retry::spawn(strategy, || gps::fetch_location(client, config)).await;
    let sample = match result {
        Ok(sample) => sample,
        Err(e) => {
            warn!("⚠️ GPS fetch failed: {}. Keeping last known location", e);
            return;
        }
    };

    match store.record(sample).await {
        Ok(()) => info!(
            "📍 Recorded location ({}, {}) at {}",
            sample.coordinate.latitude, sample.coordinate.longitude, sample.timestamp
        ),
        Err(RecordError::OutOfOrder { timestamp }) => {
            warn!("⚠️ Dropping out-of-order sample at {}", timestamp);
        }
        Err(RecordError::Persistence(e)) => {
            warn!("⚠️ Could not persist trip state: {}. In-memory state is still served", e);
        }
    }
}
