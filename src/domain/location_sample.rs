use crate::domain::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single GPS point reported by the upstream provider. Immutable once
/// recorded; the persisted JSON keeps the provider's flat
/// latitude/longitude/timestamp shape.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct LocationSample {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
}

impl LocationSample {
    pub fn new(coordinate: Coordinate, timestamp: DateTime<Utc>) -> Self {
        LocationSample { coordinate, timestamp }
    }
}
