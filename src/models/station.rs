use serde::{Deserialize, Serialize};
use validator::Validate;

/// Station metadata row from the monthly station file.
///
/// The WBAN identifier is stored normalized (whitespace trimmed, leading
/// zeros stripped) so it joins against the dependent files regardless of
/// zero-padding. Coordinates and ground height are required; the remaining
/// descriptive fields may be blank in the source data.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StationRecord {
    pub wban: String,
    pub wmo: String,
    pub call_sign: String,
    pub climate_division_code: String,
    pub climate_division_state_code: String,
    pub climate_division_station_code: String,
    pub name: String,
    pub state: String,
    pub location: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub ground_height: i32,
    pub station_height: String,
    pub barometer: String,
    pub time_zone: String,
}

/// Opaque storage-assigned key for a persisted station document.
///
/// Produced by the sink when a station batch is inserted, correlated to the
/// submitted records by position, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationKey(String);

impl StationKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(latitude: f64, longitude: f64) -> StationRecord {
        StationRecord {
            wban: "94756".to_string(),
            wmo: "72502".to_string(),
            call_sign: "EWR".to_string(),
            climate_division_code: "".to_string(),
            climate_division_state_code: "28".to_string(),
            climate_division_station_code: "".to_string(),
            name: "NEWARK INTL ARPT".to_string(),
            state: "NJ".to_string(),
            location: "NEWARK".to_string(),
            latitude,
            longitude,
            ground_height: 10,
            station_height: "30".to_string(),
            barometer: "40".to_string(),
            time_zone: "-5".to_string(),
        }
    }

    #[test]
    fn test_station_validation() {
        assert!(station(40.5, -74.2).validate().is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(station(91.0, -74.2).validate().is_err());
        assert!(station(40.5, -190.0).validate().is_err());
    }

    #[test]
    fn test_station_key_round_trip() {
        let key = StationKey::new("stn-00000001");
        assert_eq!(key.as_str(), "stn-00000001");
        assert_eq!(key.to_string(), "stn-00000001");
    }
}
