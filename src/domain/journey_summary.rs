use chrono::{DateTime, Utc};
use serde::Serialize;

/// Derived trip figures, recomputed on each request and never persisted.
/// `eta` is `None` when no arrival can be projected, e.g. when the average
/// speed is not positive.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct JourneySummary {
    pub total_distance_miles: f64,
    pub elapsed_hours: f64,
    pub average_speed_mph: f64,
    pub remaining_distance_miles: f64,
    pub eta: Option<DateTime<Utc>>,
}
