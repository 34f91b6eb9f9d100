use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Public IP address as reported by the discovery endpoint, unvalidated.
pub type IpAddress = String;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", self.latitude, self.longitude)
    }
}

/// A single overhead pass: rise time in epoch seconds and duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassWindow {
    pub risetime: i64,
    pub duration: i64,
}

impl PassWindow {
    pub fn rise_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.risetime, 0)
    }
}
