use crate::domain::{DrivingSchedule, LocationSample};
use crate::geo;
use crate::persistence::DailyStats;
use tracing::debug;

/// Folds a new sample into the per-day aggregates. The sample is assigned to
/// the calendar day of its timestamp in the schedule's reference timezone;
/// the great-circle distance from the previous sample is added to that day.
/// The wall-clock gap counts as driving time only when it stays below the
/// configured sanity threshold, so overnight and idle gaps are not billed as
/// driving. Segments implying an unrealistic speed contribute nothing.
pub fn apply_sample(stats: &mut DailyStats, previous: Option<&LocationSample>, sample: &LocationSample, schedule: &DrivingSchedule) {
    let day = schedule.local_day(sample.timestamp);
    let record = stats.entry(day).or_default();

    let Some(previous) = previous else {
        return; // First sample of the trip, no segment yet
    };

    let gap_seconds = (sample.timestamp - previous.timestamp).num_seconds();
    if gap_seconds <= 0 {
        return;
    }

    let gap_hours = gap_seconds as f64 / 3600.0;
    let distance_miles = geo::haversine_miles(previous.coordinate, sample.coordinate);

    if distance_miles / gap_hours > schedule.max_realistic_speed_mph {
        debug!(
            "🛰 Discarding segment of {:.2} miles over {:.4} hours, implied speed is unrealistic",
            distance_miles, gap_hours
        );
        return;
    }

    record.distance_miles += distance_miles;
    if gap_seconds < schedule.max_driving_gap.as_secs() as i64 {
        record.driving_hours += gap_hours;
    }
}
