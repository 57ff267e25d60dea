use crate::analytics;
use crate::domain::{JourneySummary, LocationSample};
use crate::persistence::DailyStats;
use crate::web::WebState;
use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/location", get(location))
        .route("/journey_average", get(journey_average))
        .route("/daily-stats", get(daily_stats))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Read-only endpoints answer with an explicit "no data" body while the
/// history is empty, never with an error status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MaybeData<T> {
    Data(T),
    NoData { status: &'static str },
}

impl<T> MaybeData<T> {
    fn no_data() -> Self {
        MaybeData::NoData { status: "no data" }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPayload {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
    pub total_distance_miles: f64,
    pub elapsed_hours: f64,
    pub average_speed_mph: f64,
    pub remaining_distance_miles: f64,
    pub eta: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyAveragePayload {
    pub average_speed_mph: f64,
    pub total_distance_miles: f64,
    pub elapsed_hours: f64,
}

async fn location(State(state): State<WebState>) -> Json<MaybeData<LocationPayload>> {
    let Some((latest, summary)) = summarize(&state, Utc::now()).await else {
        return Json(MaybeData::no_data());
    };

    Json(MaybeData::Data(LocationPayload {
        latitude: latest.coordinate.latitude,
        longitude: latest.coordinate.longitude,
        timestamp: latest.timestamp,
        total_distance_miles: summary.total_distance_miles,
        elapsed_hours: summary.elapsed_hours,
        average_speed_mph: summary.average_speed_mph,
        remaining_distance_miles: summary.remaining_distance_miles,
        eta: summary.eta,
    }))
}

async fn journey_average(State(state): State<WebState>) -> Json<MaybeData<JourneyAveragePayload>> {
    let Some((_, summary)) = summarize(&state, Utc::now()).await else {
        return Json(MaybeData::no_data());
    };

    Json(MaybeData::Data(JourneyAveragePayload {
        average_speed_mph: summary.average_speed_mph,
        total_distance_miles: summary.total_distance_miles,
        elapsed_hours: summary.elapsed_hours,
    }))
}

async fn daily_stats(State(state): State<WebState>) -> Json<DailyStats> {
    Json(state.store.daily_stats().await)
}

async fn summarize(state: &WebState, now: DateTime<Utc>) -> Option<(LocationSample, JourneySummary)> {
    let latest = state.store.latest().await?;

    // After a restart the history file may be gone while the last location
    // survived; the summary then degrades to the origin-to-latest fallback.
    let mut history = state.store.history().await;
    if history.is_empty() {
        history.push(latest);
    }

    let summary = analytics::compute_summary(&history, &state.plan, &state.schedule, now)?;
    Some((latest, summary))
}
