use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::StationKey;

/// Hourly surface observation row, resolved against a persisted station.
///
/// Sky condition and weather type are multi-valued in the source (space
/// separated METAR-style tokens) and are split on ingest. Measurement fields
/// follow the zero-on-failure policy; flag and code columns stay as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub wban: String,
    pub station_key: StationKey,
    pub timestamp: NaiveDateTime,

    pub station_type: String,
    pub sky_condition: Vec<String>,
    pub visibility: f64,
    pub weather_type: Vec<String>,
    pub dry_bulb_fahrenheit: f64,
    pub dry_bulb_celsius: f64,
    pub wet_bulb_fahrenheit: f64,
    pub wet_bulb_celsius: f64,
    pub dew_point_fahrenheit: f64,
    pub dew_point_celsius: f64,
    pub relative_humidity: i32,
    pub wind_speed: f64,
    pub wind_direction: i32,
    pub wind_value: String,
    pub station_pressure: f64,
    pub pressure_tendency: String,
    pub pressure_change: f64,
    pub sea_level_pressure: f64,
    pub record_type: String,
    pub hourly_precip: f64,
    pub altimeter: f64,
}
