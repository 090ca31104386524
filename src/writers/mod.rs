pub mod jsonl_writer;
pub mod memory;

pub use jsonl_writer::JsonlWriter;
pub use memory::MemorySink;

use crate::error::Result;
use crate::models::{DailyRecord, HourlyRecord, PrecipRecord, StationKey, StationRecord};

/// Batch destination for the four record kinds of a monthly extract.
///
/// Implementations must insert one document per submitted record; the station
/// operation returns the generated keys in submission order, which is the
/// contract the key resolver is built on.
pub trait BatchSink {
    fn insert_stations(&mut self, batch: &[StationRecord]) -> Result<Vec<StationKey>>;

    fn insert_precip(&mut self, batch: &[PrecipRecord]) -> Result<()>;

    fn insert_dailies(&mut self, batch: &[DailyRecord]) -> Result<()>;

    fn insert_hourlies(&mut self, batch: &[HourlyRecord]) -> Result<()>;
}
