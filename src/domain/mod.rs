mod coordinate;
mod daily_record;
mod driving_schedule;
mod journey_summary;
mod location_sample;
mod trip_plan;

pub use coordinate::Coordinate;
pub use daily_record::DailyRecord;
pub use driving_schedule::DrivingSchedule;
pub use journey_summary::JourneySummary;
pub use location_sample::LocationSample;
pub use trip_plan::TripPlan;
