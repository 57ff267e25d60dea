use crate::bucketer;
use crate::domain::{DrivingSchedule, LocationSample};
use crate::persistence::{DailyStats, PersistenceError, Storage};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct TripState {
    history: Vec<LocationSample>,
    last_location: Option<LocationSample>,
    daily_stats: DailyStats,
}

/// The process-wide trip state: the append-only sample history, the
/// last-known location, and the per-day aggregates. Loaded from the persisted
/// tables at startup and handed to the request handlers; the poll routine is
/// the only writer.
#[derive(Clone)]
pub struct TripStore {
    state: Arc<RwLock<TripState>>,
    storage: Arc<dyn Storage>,
    schedule: DrivingSchedule,
}

impl TripStore {
    /// Restores the store from the persisted tables. A table that fails to
    /// load starts out empty rather than aborting startup.
    pub async fn load(storage: Arc<dyn Storage>, schedule: DrivingSchedule) -> Self {
        let history = storage.load_history().await.unwrap_or_else(|e| {
            warn!("⚠️ Could not load location history: {}", e);
            Vec::new()
        });
        let daily_stats = storage.load_daily_stats().await.unwrap_or_else(|e| {
            warn!("⚠️ Could not load daily stats: {}", e);
            DailyStats::new()
        });
        let last_location = storage
            .load_last_location()
            .await
            .unwrap_or_else(|e| {
                warn!("⚠️ Could not load last location: {}", e);
                None
            })
            .or_else(|| history.last().copied());

        info!("📂 Restored {} location sample(s) across {} day(s)", history.len(), daily_stats.len());

        TripStore {
            state: Arc::new(RwLock::new(TripState {
                history,
                last_location,
                daily_stats,
            })),
            storage,
            schedule,
        }
    }

    /// Appends a sample, folds it into the daily aggregates, and persists all
    /// three tables. The in-memory state is updated before persistence, so a
    /// disk failure is reported but the new sample is still served.
    pub async fn record(&self, sample: LocationSample) -> Result<(), RecordError> {
        let (history, daily_stats) = {
            let mut state = self.state.write().await;

            if let Some(last) = state.last_location {
                if sample.timestamp < last.timestamp {
                    return Err(RecordError::OutOfOrder { timestamp: sample.timestamp });
                }
                if sample == last {
                    debug!("📍 Duplicate sample at {}, ignoring", sample.timestamp);
                    return Ok(());
                }
            }

            let previous = state.history.last().copied();
            bucketer::apply_sample(&mut state.daily_stats, previous.as_ref(), &sample, &self.schedule);
            state.history.push(sample);
            state.last_location = Some(sample);

            (state.history.clone(), state.daily_stats.clone())
        };

        self.storage.save_history(&history).await?;
        self.storage.save_daily_stats(&daily_stats).await?;
        self.storage.save_last_location(&sample).await?;

        Ok(())
    }

    /// The last recorded sample, or `None` when there is no data yet.
    pub async fn latest(&self) -> Option<LocationSample> {
        self.state.read().await.last_location
    }

    pub async fn history(&self) -> Vec<LocationSample> {
        self.state.read().await.history.clone()
    }

    pub async fn daily_stats(&self) -> DailyStats {
        self.state.read().await.daily_stats.clone()
    }
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("sample at {timestamp} is older than the last recorded sample")]
    OutOfOrder { timestamp: DateTime<Utc> },
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
