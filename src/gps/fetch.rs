use crate::app_config::AppConfig;
use crate::domain::{Coordinate, LocationSample};
use crate::gps::location_response::{DriverLocation, LocationResponse};
use chrono::{DateTime, Utc};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument};

/// Fetches the current driver location from the GPS provider and maps it to
/// a domain sample. A payload with out-of-range coordinates or an unparsable
/// timestamp is rejected here, so malformed samples never reach the store.
#[instrument(skip(client, config))]
pub async fn fetch_location(client: &Client, config: &AppConfig) -> Result<LocationSample, FetchError> {
    let response = client.get(config.gps().url()).send().await?.error_for_status()?;

    let payload = response.json::<LocationResponse>().await?;
    let sample = map_sample(payload.data.driver.location)?;
    debug!(
        "🛰 Provider reported ({}, {}) at {}",
        sample.coordinate.latitude, sample.coordinate.longitude, sample.timestamp
    );

    Ok(sample)
}

fn map_sample(location: DriverLocation) -> Result<LocationSample, FetchError> {
    let coordinate = Coordinate::new(location.latitude, location.longitude);
    if !coordinate.in_range() {
        return Err(FetchError::MalformedCoordinate {
            latitude: location.latitude,
            longitude: location.longitude,
        });
    }

    let timestamp = DateTime::parse_from_rfc3339(&location.time)
        .map_err(|_| FetchError::MalformedTimestamp(location.time.clone()))?
        .with_timezone(&Utc);

    Ok(LocationSample::new(coordinate, timestamp))
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed sample: coordinate ({latitude}, {longitude}) out of range")]
    MalformedCoordinate { latitude: f64, longitude: f64 },
    #[error("malformed sample: unparsable timestamp '{0}'")]
    MalformedTimestamp(String),
}
