use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::StringRecord;
use tracing::warn;

use crate::error::Result;
use crate::models::{DailyRecord, StationKey};
use crate::processors::KeyResolver;
use crate::readers::{column, DependentBatch};
use crate::utils::fields::{normalize_wban, optional_f64, optional_i32, parse_date};

pub struct DailyReader;

impl DailyReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the daily summary file, resolving each row's WBAN identifier.
    ///
    /// The calendar date is the only required field beyond the identifier;
    /// every measurement keeps its zero value when unparseable, so no row is
    /// rejected for a bad measurement.
    pub fn read_dailies(
        &self,
        path: &Path,
        resolver: &KeyResolver,
    ) -> Result<DependentBatch<DailyRecord>> {
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
                warn!("no station for WBAN {wban}; skipping daily row");
                batch.unresolved.push(wban);
                continue;
            };

            batch
                .records
                .push(self.parse_daily_row(&record, wban, key.clone())?);
        }

        Ok(batch)
    }

    fn parse_daily_row(
        &self,
        record: &StringRecord,
        wban: String,
        key: StationKey,
    ) -> Result<DailyRecord> {
        Ok(DailyRecord {
            wban,
            station_key: key,
            date: parse_date("daily date", column(record, 1))?,
            tmax: optional_f64(column(record, 2)),
            tmin: optional_f64(column(record, 4)),
            tavg: optional_f64(column(record, 6)),
            dew_point: optional_f64(column(record, 10)),
            wet_bulb: optional_f64(column(record, 12)),
            heat: optional_f64(column(record, 14)),
            cool: optional_f64(column(record, 16)),
            code_sum: column(record, 22).trim().to_string(),
            snowfall: optional_f64(column(record, 28)),
            precip_total: optional_f64(column(record, 30)),
            station_pressure: optional_f64(column(record, 32)),
            sea_level_pressure: optional_f64(column(record, 34)),
            result_speed: optional_f64(column(record, 36)),
            result_dir: optional_i32(column(record, 38)),
            avg_speed: optional_f64(column(record, 40)),
            max5_speed: optional_f64(column(record, 42)),
            max5_dir: optional_i32(column(record, 44)),
            max2_speed: optional_f64(column(record, 46)),
            max2_dir: optional_i32(column(record, 48)),
        })
    }
}

impl Default for DailyReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Build a 49-column daily row with the given values by index
    fn daily_row(values: &[(usize, &str)]) -> String {
        let mut columns = vec![String::new(); 49];
        for (idx, value) in values {
            columns[*idx] = (*value).to_string();
        }
        columns.join(",")
    }

    fn header() -> String {
        (0..49).map(|i| format!("c{i}")).collect::<Vec<_>>().join(",")
    }

    fn resolver() -> KeyResolver {
        KeyResolver::from_ordered(
            &["94756".to_string()],
            &[StationKey::new("stn-00000001")],
        )
        .unwrap()
    }

    #[test]
    fn test_read_daily_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", header())?;
        writeln!(
            temp_file,
            "{}",
            daily_row(&[
                (0, "094756"),
                (1, "20171201"),
                (2, "43"),
                (4, "29"),
                (6, "36"),
                (22, "RA SN"),
                (30, "0.21"),
                (38, "270"),
            ])
        )?;

        let reader = DailyReader::new();
        let batch = reader.read_dailies(temp_file.path(), &resolver())?;

        assert_eq!(batch.records.len(), 1);
        let rec = &batch.records[0];
        assert_eq!(rec.wban, "94756");
        assert_eq!(rec.date.to_string(), "2017-12-01");
        assert_eq!(rec.tmax, 43.0);
        assert_eq!(rec.tmin, 29.0);
        assert_eq!(rec.tavg, 36.0);
        assert_eq!(rec.code_sum, "RA SN");
        assert_eq!(rec.precip_total, 0.21);
        assert_eq!(rec.result_dir, 270);

        Ok(())
    }

    #[test]
    fn test_missing_measurement_keeps_zero_and_row() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", header())?;
        writeln!(
            temp_file,
            "{}",
            daily_row(&[(0, "94756"), (1, "20171201"), (2, "M"), (4, "29")])
        )?;

        let reader = DailyReader::new();
        let batch = reader.read_dailies(temp_file.path(), &resolver())?;

        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].tmax, 0.0);
        assert_eq!(batch.records[0].tmin, 29.0);

        Ok(())
    }

    #[test]
    fn test_unresolved_and_empty_rows_skipped() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", header())?;
        writeln!(temp_file, "{}", daily_row(&[(1, "20171201")]))?;
        writeln!(temp_file, "{}", daily_row(&[(0, "3032"), (1, "20171201")]))?;

        let reader = DailyReader::new();
        let batch = reader.read_dailies(temp_file.path(), &resolver())?;

        assert!(batch.records.is_empty());
        assert_eq!(batch.empty_identifier_rows, 1);
        assert_eq!(batch.unresolved, vec!["3032"]);
        assert_eq!(batch.skipped_rows(), 2);

        Ok(())
    }

    #[test]
    fn test_malformed_date_is_fatal() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", header())?;
        writeln!(temp_file, "{}", daily_row(&[(0, "94756"), (1, "12/01/2017")]))?;

        let reader = DailyReader::new();
        assert!(reader.read_dailies(temp_file.path(), &resolver()).is_err());

        Ok(())
    }
}
