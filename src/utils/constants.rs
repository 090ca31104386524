/// File kind suffixes within a monthly extract
pub const STATION_FILE_SUFFIX: &str = "station";
pub const PRECIP_FILE_SUFFIX: &str = "precip";
pub const DAILY_FILE_SUFFIX: &str = "daily";
pub const HOURLY_FILE_SUFFIX: &str = "hourly";

/// Number of trailing path characters that encode the period id (year + month)
pub const PERIOD_ID_LEN: usize = 6;

/// Date and time patterns used across the extract files
pub const DATE_FORMAT: &str = "%Y%m%d";
pub const HOURLY_DATETIME_FORMAT: &str = "%Y%m%d %H%M";

/// Precip hour field encodes the interval *ending* at that hour (1..=24)
pub const PRECIP_MIN_HOUR: i32 = 1;
pub const PRECIP_MAX_HOUR: i32 = 24;

/// Geographic bounds for station coordinates
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
