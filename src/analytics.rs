use crate::domain::{DrivingSchedule, JourneySummary, LocationSample, TripPlan};
use crate::geo;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

/// Hard cap on the ETA day-walk (five years of calendar days). A tiny but
/// positive average speed must not send the projection into an unbounded loop.
const MAX_ETA_DAY_STEPS: usize = 1825;

/// Computes the derived journey figures from the ordered sample history.
/// Returns `None` when there is no data yet.
pub fn compute_summary(history: &[LocationSample], plan: &TripPlan, schedule: &DrivingSchedule, now: DateTime<Utc>) -> Option<JourneySummary> {
    let latest = history.last()?;

    let total_distance_miles = total_distance(history, plan);
    let elapsed_hours = elapsed_hours(plan.start, now);
    let average_speed_mph = if elapsed_hours > 0.0 {
        total_distance_miles / elapsed_hours
    } else {
        plan.fallback_average_speed_mph
    };
    let remaining_distance_miles = geo::haversine_miles(latest.coordinate, plan.destination);
    let eta = estimate_arrival(remaining_distance_miles, average_speed_mph, now, schedule);

    Some(JourneySummary {
        total_distance_miles,
        elapsed_hours,
        average_speed_mph,
        remaining_distance_miles,
        eta,
    })
}

/// Cumulative great-circle distance across consecutive samples. With fewer
/// than two samples the straight-line distance from the trip origin to the
/// latest position is used instead.
fn total_distance(history: &[LocationSample], plan: &TripPlan) -> f64 {
    match history {
        [] => 0.0,
        [only] => geo::haversine_miles(plan.origin, only.coordinate),
        _ => history
            .windows(2)
            .map(|pair| geo::haversine_miles(pair[0].coordinate, pair[1].coordinate))
            .sum(),
    }
}

/// Hours since the trip started, floored at zero for clocks that disagree.
fn elapsed_hours(start: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    ((now - start).num_seconds() as f64 / 3600.0).max(0.0)
}

/// Walks forward day by day from `now`, spending `average_speed_mph` only
/// within the daily driving window (and only on driving days), until the
/// remaining distance is covered; the arrival is interpolated within the
/// final partial day. Returns `None` for a non-positive speed or when the
/// destination is not reached within the iteration cap.
pub fn estimate_arrival(
    remaining_miles: f64,
    average_speed_mph: f64,
    now: DateTime<Utc>,
    schedule: &DrivingSchedule,
) -> Option<DateTime<Utc>> {
    if !average_speed_mph.is_finite() || average_speed_mph <= 0.0 {
        return None;
    }
    if remaining_miles <= 0.0 {
        return Some(now);
    }

    let offset = schedule.offset();
    let mut cursor = now.with_timezone(&offset);
    let mut remaining = remaining_miles;

    for _ in 0..MAX_ETA_DAY_STEPS {
        let date = cursor.date_naive();
        if schedule.drives_on(date.weekday()) {
            let window_start = at_hour(date, schedule.drive_start_hour, offset);
            let window_end = at_hour(date, schedule.drive_end_hour, offset);
            let departure = cursor.max(window_start);

            if departure < window_end {
                let available_hours = (window_end - departure).num_seconds() as f64 / 3600.0;
                let reachable_miles = average_speed_mph * available_hours;

                if reachable_miles >= remaining {
                    let hours_needed = remaining / average_speed_mph;
                    let arrival = departure + Duration::milliseconds((hours_needed * 3_600_000.0) as i64);
                    return Some(arrival.with_timezone(&Utc));
                }
                remaining -= reachable_miles;
            }
        }

        cursor = at_hour(date.succ_opt()?, 0, offset);
    }

    None
}

fn at_hour(date: NaiveDate, hour: u32, offset: FixedOffset) -> DateTime<FixedOffset> {
    offset
        .from_local_datetime(&date.and_hms_opt(hour, 0, 0).expect("hour within 0..=23"))
        .single()
        .expect("fixed offsets are unambiguous")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;
    use chrono::{NaiveDate, TimeZone, Timelike};
    use pretty_assertions::assert_eq;
    use std::time::Duration as StdDuration;

    const CARY_NC: Coordinate = Coordinate { latitude: 35.779, longitude: -78.638 };
    const MILPITAS_CA: Coordinate = Coordinate { latitude: 37.428, longitude: -121.903 };
    // Roughly 937 great-circle miles short of Milpitas
    const NEW_MEXICO: Coordinate = Coordinate { latitude: 35.0, longitude: -105.35 };

    fn plan() -> TripPlan {
        TripPlan {
            start: Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).unwrap(),
            origin: CARY_NC,
            destination: MILPITAS_CA,
            fallback_average_speed_mph: 37.0,
        }
    }

    fn schedule() -> DrivingSchedule {
        DrivingSchedule {
            drive_start_hour: 8,
            drive_end_hour: 20,
            include_weekends: false,
            utc_offset_hours: 0,
            max_driving_gap: StdDuration::from_secs(15 * 60),
            max_realistic_speed_mph: 90.0,
        }
    }

    fn sample_at(coordinate: Coordinate, timestamp: DateTime<Utc>) -> LocationSample {
        LocationSample::new(coordinate, timestamp)
    }

    #[test]
    fn empty_history_yields_no_summary() {
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0).unwrap();

        assert_eq!(compute_summary(&[], &plan(), &schedule(), now), None);
    }

    #[test]
    fn a_single_sample_falls_back_to_the_origin_distance() {
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0).unwrap();
        let history = [sample_at(NEW_MEXICO, now)];

        let summary = compute_summary(&history, &plan(), &schedule(), now).unwrap();

        let expected = geo::haversine_miles(CARY_NC, NEW_MEXICO);
        assert!((summary.total_distance_miles - expected).abs() < 1e-9);
    }

    #[test]
    fn cross_country_scenario_matches_the_reference_figures() {
        // Cary, NC → Milpitas, CA; five and a half days into the trip
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0).unwrap();
        let history = [sample_at(NEW_MEXICO, now)];

        let summary = compute_summary(&history, &plan(), &schedule(), now).unwrap();

        assert_eq!(summary.elapsed_hours, 132.0);
        assert!((summary.remaining_distance_miles - 937.0).abs() < 1.0, "got {}", summary.remaining_distance_miles);
        // Straight-line progress over elapsed wall-clock time
        assert!((summary.average_speed_mph - summary.total_distance_miles / 132.0).abs() < 1e-9);

        let eta = summary.eta.unwrap();
        assert!(eta > now, "ETA must fall after now");
        assert!(eta.date_naive() > NaiveDate::from_ymd_opt(2025, 9, 21).unwrap(), "ETA spans several calendar days");
        assert!((8..20).contains(&eta.hour()), "ETA must land inside the driving window");
    }

    #[test]
    fn eta_walk_interpolates_within_the_final_driving_day() {
        // 937 miles at 37 mph needs 25.32 driving hours. Saturday noon start
        // with weekends off: Monday and Tuesday give 12 hours each, the rest
        // lands 1.32 hours into Wednesday's window.
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0).unwrap();

        let eta = estimate_arrival(937.0, 37.0, now, &schedule()).unwrap();

        let expected_hours = 937.0 / 37.0 - 24.0;
        let expected = at_hour(NaiveDate::from_ymd_opt(2025, 9, 24).unwrap(), 8, schedule().offset())
            + Duration::milliseconds((expected_hours * 3_600_000.0) as i64);
        assert_eq!(eta, expected.with_timezone(&Utc));
    }

    #[test]
    fn eta_starts_same_day_when_inside_the_window() {
        // Monday 10:00, 30 miles at 30 mph: arrival 11:00 the same day
        let now = Utc.with_ymd_and_hms(2025, 9, 22, 10, 0, 0).unwrap();

        let eta = estimate_arrival(30.0, 30.0, now, &schedule()).unwrap();

        assert_eq!(eta, Utc.with_ymd_and_hms(2025, 9, 22, 11, 0, 0).unwrap());
    }

    #[test]
    fn eta_waits_for_the_window_to_open() {
        // Monday 05:00, driving starts at 08:00
        let now = Utc.with_ymd_and_hms(2025, 9, 22, 5, 0, 0).unwrap();

        let eta = estimate_arrival(30.0, 30.0, now, &schedule()).unwrap();

        assert_eq!(eta, Utc.with_ymd_and_hms(2025, 9, 22, 9, 0, 0).unwrap());
    }

    #[test]
    fn eta_is_unknown_for_a_non_positive_speed() {
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0).unwrap();

        assert_eq!(estimate_arrival(937.0, 0.0, now, &schedule()), None);
        assert_eq!(estimate_arrival(937.0, -5.0, now, &schedule()), None);
        assert_eq!(estimate_arrival(937.0, f64::NAN, now, &schedule()), None);
    }

    #[test]
    fn eta_walk_terminates_for_a_tiny_positive_speed() {
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0).unwrap();

        // 1e-6 mph never covers 937 miles within the day cap
        assert_eq!(estimate_arrival(937.0, 1e-6, now, &schedule()), None);
    }

    #[test]
    fn elapsed_hours_is_floored_at_zero() {
        let before_start = Utc.with_ymd_and_hms(2025, 9, 14, 12, 0, 0).unwrap();
        let history = [sample_at(NEW_MEXICO, before_start)];

        let summary = compute_summary(&history, &plan(), &schedule(), before_start).unwrap();

        assert_eq!(summary.elapsed_hours, 0.0);
        // Division-by-zero guard: the configured historical average is used
        assert_eq!(summary.average_speed_mph, 37.0);
    }

    #[test]
    fn weekends_count_when_configured() {
        let mut schedule = schedule();
        schedule.include_weekends = true;
        // Saturday 12:00, 30 miles at 30 mph: still within Saturday's window
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0).unwrap();

        let eta = estimate_arrival(30.0, 30.0, now, &schedule).unwrap();

        assert_eq!(eta, Utc.with_ymd_and_hms(2025, 9, 20, 13, 0, 0).unwrap());
    }
}
