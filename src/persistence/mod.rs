mod json_storage;

pub use json_storage::JsonStorage;

use crate::domain::{DailyRecord, LocationSample};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type DailyStats = BTreeMap<NaiveDate, DailyRecord>;

/// One `load`/`save` pair per logical table, so the JSON files can be swapped
/// for an embedded store without touching the analytics or store code.
/// Missing tables load as empty.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn load_history(&self) -> Result<Vec<LocationSample>, PersistenceError>;
    async fn save_history(&self, history: &[LocationSample]) -> Result<(), PersistenceError>;

    async fn load_daily_stats(&self) -> Result<DailyStats, PersistenceError>;
    async fn save_daily_stats(&self, stats: &DailyStats) -> Result<(), PersistenceError>;

    async fn load_last_location(&self) -> Result<Option<LocationSample>, PersistenceError>;
    async fn save_last_location(&self, sample: &LocationSample) -> Result<(), PersistenceError>;
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("malformed JSON in '{path}': {source}")]
    Json { source: serde_json::Error, path: PathBuf },
}
