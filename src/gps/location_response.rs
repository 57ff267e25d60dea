use serde::Deserialize;

/// Envelope returned by the dispatch provider's driver-location endpoint.
#[derive(Debug, Deserialize)]
pub struct LocationResponse {
    pub data: Data,
}

#[derive(Debug, Deserialize)]
pub struct Data {
    pub driver: Driver,
}

#[derive(Debug, Deserialize)]
pub struct Driver {
    pub location: DriverLocation,
}

#[derive(Debug, Deserialize)]
pub struct DriverLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub time: String, // RFC 3339
}
