use crate::domain::{DrivingSchedule, TripPlan};
use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    gps: Gps,
    poller: Poller,
    storage: Storage,
    web: Web,
    trip: TripPlan,
    schedule: DrivingSchedule,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn gps(&self) -> &Gps {
        &self.gps
    }

    pub fn poller(&self) -> &Poller {
        &self.poller
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn web(&self) -> &Web {
        &self.web
    }

    pub fn trip(&self) -> &TripPlan {
        &self.trip
    }

    pub fn schedule(&self) -> &DrivingSchedule {
        &self.schedule
    }
}

#[derive(Debug, Deserialize)]
pub struct Gps {
    url: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Gps {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Poller {
    #[serde(with = "humantime_serde")]
    interval: Duration,
}

impl Poller {
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[derive(Debug, Deserialize)]
pub struct Storage {
    data_dir: String,
}

impl Storage {
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }
}

#[derive(Debug, Deserialize)]
pub struct Web {
    bind_address: String,
}

impl Web {
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        use crate::domain::Coordinate;
        use chrono::{TimeZone, Utc};

        AppConfigBuilder {
            config: AppConfig {
                gps: Gps {
                    url: "https://gps.url/".to_string(),
                    timeout: Duration::from_secs(10),
                },
                poller: Poller {
                    interval: Duration::from_secs(60),
                },
                storage: Storage {
                    data_dir: "truck_data".to_string(),
                },
                web: Web {
                    bind_address: "127.0.0.1:8080".to_string(),
                },
                trip: TripPlan {
                    start: Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).unwrap(),
                    origin: Coordinate::new(35.779, -78.638),
                    destination: Coordinate::new(37.428, -121.903),
                    fallback_average_speed_mph: 37.0,
                },
                schedule: DrivingSchedule {
                    drive_start_hour: 8,
                    drive_end_hour: 20,
                    include_weekends: false,
                    utc_offset_hours: 0,
                    max_driving_gap: Duration::from_secs(15 * 60),
                    max_realistic_speed_mph: 90.0,
                },
            },
        }
    }

    pub fn gps_url(mut self, url: String) -> Self {
        self.config.gps.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
