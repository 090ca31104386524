pub mod daily_reader;
pub mod hourly_reader;
pub mod precip_reader;
pub mod station_reader;

pub use daily_reader::DailyReader;
pub use hourly_reader::HourlyReader;
pub use precip_reader::PrecipReader;
pub use station_reader::{StationBatch, StationReader};

/// Parsed output of one dependent file: the typed batch plus the rows that
/// were dropped on the way (tracked so callers can report them)
#[derive(Debug)]
pub struct DependentBatch<T> {
    pub records: Vec<T>,
    /// Normalized identifiers that had no resolved station key
    pub unresolved: Vec<String>,
    /// Rows skipped because the raw identifier field was empty
    pub empty_identifier_rows: usize,
}

impl<T> DependentBatch<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            unresolved: Vec::new(),
            empty_identifier_rows: 0,
        }
    }

    pub fn skipped_rows(&self) -> usize {
        self.unresolved.len() + self.empty_identifier_rows
    }
}

impl<T> Default for DependentBatch<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch a column by index, treating a missing column as an empty field
pub(crate) fn column(record: &csv::StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}
