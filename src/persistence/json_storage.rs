use crate::domain::LocationSample;
use crate::persistence::{DailyStats, PersistenceError, Storage};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tokio::fs;

const HISTORY_FILE: &str = "location_history.json";
const DAILY_STATS_FILE: &str = "daily_stats.json";
const LAST_LOCATION_FILE: &str = "last_location.json";

/// Flat-file JSON persistence: one file per logical table under `data_dir`.
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write never leaves a half-written table behind.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    data_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        JsonStorage { data_dir: data_dir.into() }
    }

    async fn load_table<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, PersistenceError> {
        let path = self.data_dir.join(file);
        let content = match fs::read(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let value = serde_json::from_slice(&content).map_err(|source| PersistenceError::Json { source, path })?;
        Ok(Some(value))
    }

    async fn save_table<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.data_dir).await?;

        let path = self.data_dir.join(file);
        let temp_path = self.data_dir.join(format!("{file}.tmp"));
        let content = serde_json::to_vec(value).map_err(|source| PersistenceError::Json {
            source,
            path: path.clone(),
        })?;

        fs::write(&temp_path, content).await?;
        fs::rename(&temp_path, &path).await?;
        Ok(())
    }
}

#[async_trait]
impl Storage for JsonStorage {
    async fn load_history(&self) -> Result<Vec<LocationSample>, PersistenceError> {
        Ok(self.load_table(HISTORY_FILE).await?.unwrap_or_default())
    }

    async fn save_history(&self, history: &[LocationSample]) -> Result<(), PersistenceError> {
        self.save_table(HISTORY_FILE, history).await
    }

    async fn load_daily_stats(&self) -> Result<DailyStats, PersistenceError> {
        Ok(self.load_table(DAILY_STATS_FILE).await?.unwrap_or_default())
    }

    async fn save_daily_stats(&self, stats: &DailyStats) -> Result<(), PersistenceError> {
        self.save_table(DAILY_STATS_FILE, stats).await
    }

    async fn load_last_location(&self) -> Result<Option<LocationSample>, PersistenceError> {
        self.load_table(LAST_LOCATION_FILE).await
    }

    async fn save_last_location(&self, sample: &LocationSample) -> Result<(), PersistenceError> {
        self.save_table(LAST_LOCATION_FILE, sample).await
    }
}
