use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use tracing::warn;

use crate::error::{LoadError, Result};
use crate::models::{HourlyRecord, StationKey};
use crate::processors::KeyResolver;
use crate::readers::{column, DependentBatch};
use crate::utils::constants::HOURLY_DATETIME_FORMAT;
use crate::utils::fields::{normalize_wban, optional_f64, optional_i32, split_tokens};

pub struct HourlyReader;

impl HourlyReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the hourly observation file, resolving each row's WBAN identifier.
    ///
    /// The observation timestamp (date column concatenated with the HHMM time
    /// column) is required; everything else follows the zero-on-failure
    /// measurement policy or stays a raw string for flag/code columns.
    pub fn read_hourlies(
        &self,
        path: &Path,
        resolver: &KeyResolver,
    ) -> Result<DependentBatch<HourlyRecord>> {
        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut batch = DependentBatch::new();

        for row in reader.records() {
            let record = row?;

            if column(&record, 0).is_empty() {
                batch.empty_identifier_rows += 1;
                continue;
            }

            let wban = normalize_wban(column(&record, 0));
            let Some(key) = resolver.resolve(&wban) else {
                warn!("no station for WBAN {wban}; skipping hourly row");
                batch.unresolved.push(wban);
                continue;
            };

            batch
                .records
                .push(self.parse_hourly_row(&record, wban, key.clone())?);
        }

        Ok(batch)
    }

    fn parse_hourly_row(
        &self,
        record: &StringRecord,
        wban: String,
        key: StationKey,
    ) -> Result<HourlyRecord> {
        Ok(HourlyRecord {
            wban,
            station_key: key,
            timestamp: observation_time(column(record, 1), column(record, 2))?,
            station_type: column(record, 3).trim().to_string(),
            sky_condition: split_tokens(column(record, 4)),
            visibility: optional_f64(column(record, 6)),
            weather_type: split_tokens(column(record, 8)),
            dry_bulb_fahrenheit: optional_f64(column(record, 10)),
            dry_bulb_celsius: optional_f64(column(record, 12)),
            wet_bulb_fahrenheit: optional_f64(column(record, 14)),
            wet_bulb_celsius: optional_f64(column(record, 16)),
            dew_point_fahrenheit: optional_f64(column(record, 18)),
            dew_point_celsius: optional_f64(column(record, 20)),
            relative_humidity: optional_i32(column(record, 22)),
            wind_speed: optional_f64(column(record, 24)),
            wind_direction: optional_i32(column(record, 26)),
            wind_value: column(record, 28).trim().to_string(),
            station_pressure: optional_f64(column(record, 30)),
            pressure_tendency: column(record, 32).trim().to_string(),
            pressure_change: optional_f64(column(record, 34)),
            sea_level_pressure: optional_f64(column(record, 36)),
            record_type: column(record, 38).trim().to_string(),
            hourly_precip: optional_f64(column(record, 40)),
            altimeter: optional_f64(column(record, 42)),
        })
    }
}

impl Default for HourlyReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Combine the date and HHMM time columns into the observation timestamp
fn observation_time(date_raw: &str, time_raw: &str) -> Result<NaiveDateTime> {
    let combined = format!("{} {}", date_raw.trim(), time_raw.trim());

    NaiveDateTime::parse_from_str(&combined, HOURLY_DATETIME_FORMAT).map_err(|_| {
        LoadError::Timestamp {
            date: date_raw.trim().to_string(),
            hour: time_raw.trim().to_string(),
        }
    })
}
