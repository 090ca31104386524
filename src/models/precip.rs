use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::StationKey;

/// Hourly precipitation row, resolved against a persisted station.
///
/// The timestamp marks the *end* of the observation interval: the source
/// file stores hour N for the bucket ending at N, so hour 13 becomes 12:00.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrecipRecord {
    pub wban: String,
    pub station_key: StationKey,
    pub timestamp: NaiveDateTime,
    pub precipitation: f64,
}

impl PrecipRecord {
    pub fn new(
        wban: String,
        station_key: StationKey,
        timestamp: NaiveDateTime,
        precipitation: f64,
    ) -> Self {
        Self {
            wban,
            station_key,
            timestamp,
            precipitation,
        }
    }
}
