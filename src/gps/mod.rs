mod client;
mod fetch;
mod location_response;

pub use client::{GpsClientError, new_client};
pub use fetch::{FetchError, fetch_location};
