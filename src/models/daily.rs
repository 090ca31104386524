use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::StationKey;

/// Daily summary row, resolved against a persisted station.
///
/// Every measurement field is optional in the source data and keeps its zero
/// value when the raw field is a sentinel ("M" missing, "T" trace) or
/// otherwise unparseable. Only the identifier and date can reject a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub wban: String,
    pub station_key: StationKey,
    pub date: NaiveDate,

    pub tmax: f64,
    pub tmin: f64,
    pub tavg: f64,
    pub dew_point: f64,
    pub wet_bulb: f64,
    pub heat: f64,
    pub cool: f64,
    pub code_sum: String,
    pub snowfall: f64,
    pub precip_total: f64,
    pub station_pressure: f64,
    pub sea_level_pressure: f64,
    pub result_speed: f64,
    pub result_dir: i32,
    pub avg_speed: f64,
    pub max5_speed: f64,
    pub max5_dir: i32,
    pub max2_speed: f64,
    pub max2_dir: i32,
}
