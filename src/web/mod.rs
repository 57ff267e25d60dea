pub mod api;

use crate::domain::{DrivingSchedule, TripPlan};
use crate::store::TripStore;
use axum::{Router, extract::FromRef, response::IntoResponse, routing::get, routing::get_service};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

#[derive(Clone, FromRef)]
pub struct WebState {
    pub store: TripStore,
    pub plan: TripPlan,
    pub schedule: DrivingSchedule,
}

pub async fn start_web_server(bind_address: &str, state: WebState) -> std::io::Result<()> {
    let routes = Router::new()
        .nest_service("/api", api::routes(state))
        .route("/health", get(health))
        .fallback_service(static_content_router());

    let listener = TcpListener::bind(bind_address).await?;
    info!("🌐 Listening on {}", bind_address);
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}

/// Liveness only; no dependency checks.
async fn health() -> impl IntoResponse {
    "OK"
}

fn static_content_router() -> Router {
    Router::new().nest_service(
        "/",
        get_service(
            ServeDir::new("./resources/www/").not_found_service(ServeFile::new("./resources/www/error404.html")),
        ),
    )
}
