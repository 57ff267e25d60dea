use chrono::{DateTime, FixedOffset, NaiveDate, Utc, Weekday};
use serde::Deserialize;
use std::time::Duration;

/// Assumptions about when and how the truck moves: the daily driving window,
/// whether weekends count, the reference timezone for day boundaries, and the
/// sanity limits applied while bucketing samples.
#[derive(Clone, Debug, Deserialize)]
pub struct DrivingSchedule {
    pub drive_start_hour: u32,
    pub drive_end_hour: u32,
    pub include_weekends: bool,
    pub utc_offset_hours: i32,
    /// Gaps between consecutive samples at or above this threshold are not
    /// counted as driving time (overnight stops, long idles).
    #[serde(with = "humantime_serde")]
    pub max_driving_gap: Duration,
    /// Segments implying a higher speed than this are treated as GPS jitter.
    pub max_realistic_speed_mph: f64,
}

impl DrivingSchedule {
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).expect("utc_offset_hours within -23..=23")
    }

    pub fn drives_on(&self, weekday: Weekday) -> bool {
        self.include_weekends || !matches!(weekday, Weekday::Sat | Weekday::Sun)
    }

    /// The calendar day a timestamp belongs to, in the reference timezone.
    pub fn local_day(&self, timestamp: DateTime<Utc>) -> NaiveDate {
        timestamp.with_timezone(&self.offset()).date_naive()
    }
}
