use serde::{Deserialize, Serialize};

/// Per-day aggregates, keyed by calendar day in the daily stats table.
/// Created lazily on the first sample of a day and only ever grows.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct DailyRecord {
    pub distance_miles: f64,
    pub driving_hours: f64,
}
