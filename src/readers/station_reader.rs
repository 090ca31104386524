use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::StringRecord;
use validator::Validate;

use crate::error::Result;
use crate::models::StationRecord;
use crate::readers::column;
use crate::utils::fields::{normalize_wban, required_f64, required_i32};

/// Ordered station batch plus the parallel identifier list.
///
/// The identifier at position i belongs to the record at position i; the
/// sink's returned key list is correlated against this order, so the two
/// sequences must never diverge.
#[derive(Debug, Default)]
pub struct StationBatch {
    pub records: Vec<StationRecord>,
    pub wbans: Vec<String>,
}

pub struct StationReader;

impl StationReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the station file into an ordered batch.
    ///
    /// Rows with an empty raw identifier are skipped. Latitude, longitude and
    /// ground height are required: a station without valid location data is
    /// unusable downstream, so a parse failure there aborts the whole load.
    pub fn read_stations(&self, path: &Path) -> Result<StationBatch> {
        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut batch = StationBatch::default();

        for row in reader.records() {
            let record = row?;
            if let Some(station) = self.parse_station_row(&record)? {
                batch.wbans.push(station.wban.clone());
                batch.records.push(station);
            }
        }

        Ok(batch)
    }

    /// Parse a single station row. Returns None for rows without an identifier.
    fn parse_station_row(&self, record: &StringRecord) -> Result<Option<StationRecord>> {
        if column(record, 0).is_empty() {
            return Ok(None);
        }

        let station = StationRecord {
            wban: normalize_wban(column(record, 0)),
            wmo: column(record, 1).trim().to_string(),
            call_sign: column(record, 2).trim().to_string(),
            climate_division_code: column(record, 3).trim().to_string(),
            climate_division_state_code: column(record, 4).trim().to_string(),
            climate_division_station_code: column(record, 5).trim().to_string(),
            name: column(record, 6).trim().to_string(),
            state: column(record, 7).trim().to_string(),
            location: column(record, 8).trim().to_string(),
            latitude: required_f64("latitude", column(record, 9))?,
            longitude: required_f64("longitude", column(record, 10))?,
            ground_height: required_i32("ground height", column(record, 11))?,
            station_height: column(record, 12).trim().to_string(),
            barometer: column(record, 13).trim().to_string(),
            time_zone: column(record, 14).trim().to_string(),
        };

        station.validate()?;

        Ok(Some(station))
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "WBAN,WMO,CallSign,ClimateDivisionCode,ClimateDivisionStateCode,ClimateDivisionStationCode,Name,State,Location,Latitude,Longitude,GroundHeight,StationHeight,Barometer,TimeZone";

    #[test]
    fn test_read_stations_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(
            temp_file,
            "094756,72502,EWR,,28,,NEWARK INTL ARPT,NJ,NEWARK,40.5,-74.2,10,30,40,-5"
        )?;
        writeln!(
            temp_file,
            ",72503,LGA,,30,,LA GUARDIA ARPT,NY,NEW YORK,40.779,-73.88,11,31,41,-5"
        )?;
        writeln!(
            temp_file,
            "14732,72503,LGA,,30,,LA GUARDIA ARPT,NY,NEW YORK,40.779,-73.88,11,31,41,-5"
        )?;

        let reader = StationReader::new();
        let batch = reader.read_stations(temp_file.path())?;

        // Empty-identifier row excluded from both sequences
        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.wbans, vec!["94756", "14732"]);

        assert_eq!(batch.records[0].wban, "94756");
        assert_eq!(batch.records[0].name, "NEWARK INTL ARPT");
        assert_eq!(batch.records[0].latitude, 40.5);
        assert_eq!(batch.records[0].longitude, -74.2);
        assert_eq!(batch.records[0].ground_height, 10);
        assert_eq!(batch.records[0].time_zone, "-5");

        Ok(())
    }

    #[test]
    fn test_unparseable_latitude_is_fatal() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(
            temp_file,
            "094756,72502,EWR,,28,,NEWARK INTL ARPT,NJ,NEWARK,n/a,-74.2,10,30,40,-5"
        )?;

        let reader = StationReader::new();
        let err = reader.read_stations(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("latitude"));

        Ok(())
    }

    #[test]
    fn test_unparseable_ground_height_is_fatal() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(
            temp_file,
            "094756,72502,EWR,,28,,NEWARK INTL ARPT,NJ,NEWARK,40.5,-74.2,,30,40,-5"
        )?;

        let reader = StationReader::new();
        assert!(reader.read_stations(temp_file.path()).is_err());

        Ok(())
    }
}
