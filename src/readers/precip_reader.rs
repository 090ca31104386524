use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use tracing::warn;

use crate::error::{LoadError, Result};
use crate::models::{PrecipRecord, StationKey};
use crate::processors::KeyResolver;
use crate::readers::{column, DependentBatch};
use crate::utils::constants::{PRECIP_MAX_HOUR, PRECIP_MIN_HOUR};
use crate::utils::fields::{normalize_wban, optional_f64, parse_date, required_i32};

pub struct PrecipReader;

impl PrecipReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the precipitation file, resolving each row's WBAN identifier.
    ///
    /// Rows with an empty identifier or one that the resolver does not know
    /// are dropped; the date and hour fields are required and abort the load
    /// when malformed. The precipitation amount itself is a noisy field and
    /// defaults to 0.0.
    pub fn read_precip(
        &self,
        path: &Path,
        resolver: &KeyResolver,
    ) -> Result<DependentBatch<PrecipRecord>> {
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
                warn!("no station for WBAN {wban}; skipping precip row");
                batch.unresolved.push(wban);
                continue;
            };

            batch
                .records
                .push(self.parse_precip_row(&record, wban, key.clone())?);
        }

        Ok(batch)
    }

    fn parse_precip_row(
        &self,
        record: &StringRecord,
        wban: String,
        key: StationKey,
    ) -> Result<PrecipRecord> {
        let timestamp = interval_end(column(record, 1), column(record, 2))?;
        let precipitation = optional_f64(column(record, 3));

        Ok(PrecipRecord::new(wban, key, timestamp, precipitation))
    }
}

impl Default for PrecipReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose the end-of-interval timestamp from the date and hour columns.
/// Stored hour N covers the bucket ending at N, so the hour is decremented
/// by one before composing (hour 13 on 20171201 -> 2017-12-01T12:00:00).
fn interval_end(date_raw: &str, hour_raw: &str) -> Result<NaiveDateTime> {
    let date = parse_date("precip date", date_raw)?;
    let hour = required_i32("precip hour", hour_raw)?;

    if !(PRECIP_MIN_HOUR..=PRECIP_MAX_HOUR).contains(&hour) {
        return Err(LoadError::Timestamp {
            date: date_raw.trim().to_string(),
            hour: hour_raw.trim().to_string(),
        });
    }

    date.and_hms_opt((hour - 1) as u32, 0, 0)
        .ok_or_else(|| LoadError::Timestamp {
            date: date_raw.trim().to_string(),
            hour: hour_raw.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn resolver() -> KeyResolver {
        KeyResolver::from_ordered(
            &["94756".to_string()],
            &[StationKey::new("stn-00000001")],
        )
        .unwrap()
    }

    #[test]
    fn test_interval_end_decrements_hour() {
        let ts = interval_end("20171201", "13").unwrap();
        assert_eq!(ts.to_string(), "2017-12-01 12:00:00");

        // Hour 1 covers the interval ending at 01:00, i.e. starts the day
        let ts = interval_end("20171201", "1").unwrap();
        assert_eq!(ts.to_string(), "2017-12-01 00:00:00");
    }

    #[test]
    fn test_interval_end_rejects_bad_fields() {
        assert!(interval_end("2017120", "13").is_err());
        assert!(interval_end("20171201", "x").is_err());
        assert!(interval_end("20171201", "0").is_err());
        assert!(interval_end("20171201", "25").is_err());
    }

    #[test]
    fn test_read_precip_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "Wban,YearMonthDay,Hour,Precipitation")?;
        writeln!(temp_file, "94756,20171201,13,0.04")?;
        writeln!(temp_file, "94756,20171201,14,M")?;
        writeln!(temp_file, ",20171201,15,0.01")?;
        writeln!(temp_file, "99999,20171201,16,0.02")?;

        let reader = PrecipReader::new();
        let batch = reader.read_precip(temp_file.path(), &resolver())?;

        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.empty_identifier_rows, 1);
        assert_eq!(batch.unresolved, vec!["99999"]);

        assert_eq!(batch.records[0].wban, "94756");
        assert_eq!(batch.records[0].station_key.as_str(), "stn-00000001");
        assert_eq!(batch.records[0].timestamp.to_string(), "2017-12-01 12:00:00");
        assert_eq!(batch.records[0].precipitation, 0.04);

        // "M" precipitation defaults to zero, row still emitted
        assert_eq!(batch.records[1].precipitation, 0.0);

        Ok(())
    }

    #[test]
    fn test_zero_padded_wban_resolves() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "Wban,YearMonthDay,Hour,Precipitation")?;
        writeln!(temp_file, "094756,20171201,13,0.04")?;

        let reader = PrecipReader::new();
        let batch = reader.read_precip(temp_file.path(), &resolver())?;

        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].wban, "94756");

        Ok(())
    }

    #[test]
    fn test_malformed_date_is_fatal() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "Wban,YearMonthDay,Hour,Precipitation")?;
        writeln!(temp_file, "94756,201712AB,13,0.04")?;

        let reader = PrecipReader::new();
        assert!(reader.read_precip(temp_file.path(), &resolver()).is_err());

        Ok(())
    }
}
