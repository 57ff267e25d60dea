use crate::domain::Coordinate;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The fixed parameters of the journey: where it starts and ends, when the
/// clock started, and the historical average speed to fall back on before any
/// elapsed time has accumulated.
#[derive(Clone, Debug, Deserialize)]
pub struct TripPlan {
    pub start: DateTime<Utc>,
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub fallback_average_speed_mph: f64,
}
