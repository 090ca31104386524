use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::processors::KeyResolver;
use crate::readers::{DailyReader, HourlyReader, PrecipReader, StationReader};
use crate::utils::filename::{extract_file_path, period_id, FileKind};
use crate::utils::progress::ProgressReporter;
use crate::writers::BatchSink;

/// Counts reported after a completed load
#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub period: String,
    pub stations: usize,
    pub precip_rows: usize,
    pub daily_rows: usize,
    pub hourly_rows: usize,
    pub skipped_rows: usize,
}

impl LoadSummary {
    pub fn summary(&self) -> String {
        format!(
            "Period {}: {} stations, {} precip rows, {} daily rows, {} hourly rows loaded ({} rows skipped)",
            self.period,
            self.stations,
            self.precip_rows,
            self.daily_rows,
            self.hourly_rows,
            self.skipped_rows
        )
    }
}

/// Sequential load of one monthly extract into a batch sink.
///
/// The station file must be parsed and flushed first: the sink's returned
/// keys seed the resolver that every dependent parser needs. The three
/// dependent files then run one after another, each batch flushed as soon as
/// it is parsed. There is no transaction across files; a fatal error partway
/// through leaves earlier batches committed.
pub struct LoadPipeline<S: BatchSink> {
    sink: S,
}

impl<S: BatchSink> LoadPipeline<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn run(&mut self, input: &Path, progress: Option<&ProgressReporter>) -> Result<LoadSummary> {
        let period = period_id(input)?;

        if let Some(p) = progress {
            p.set_message("Loading station file...");
        }
        let station_path = extract_file_path(input, FileKind::Station)?;
        let station_batch = StationReader::new().read_stations(&station_path)?;
        let keys = self.sink.insert_stations(&station_batch.records)?;
        info!(count = station_batch.records.len(), "station batch inserted");

        let resolver = KeyResolver::from_ordered(&station_batch.wbans, &keys)?;

        if let Some(p) = progress {
            p.set_message("Loading precipitation file...");
        }
        let precip_path = extract_file_path(input, FileKind::Precip)?;
        let precip_batch = PrecipReader::new().read_precip(&precip_path, &resolver)?;
        self.sink.insert_precip(&precip_batch.records)?;
        info!(count = precip_batch.records.len(), "precip batch inserted");

        if let Some(p) = progress {
            p.set_message("Loading daily summary file...");
        }
        let daily_path = extract_file_path(input, FileKind::Daily)?;
        let daily_batch = DailyReader::new().read_dailies(&daily_path, &resolver)?;
        self.sink.insert_dailies(&daily_batch.records)?;
        info!(count = daily_batch.records.len(), "daily batch inserted");

        if let Some(p) = progress {
            p.set_message("Loading hourly observation file...");
        }
        let hourly_path = extract_file_path(input, FileKind::Hourly)?;
        let hourly_batch = HourlyReader::new().read_hourlies(&hourly_path, &resolver)?;
        self.sink.insert_hourlies(&hourly_batch.records)?;
        info!(count = hourly_batch.records.len(), "hourly batch inserted");

        Ok(LoadSummary {
            period,
            stations: station_batch.records.len(),
            precip_rows: precip_batch.records.len(),
            daily_rows: daily_batch.records.len(),
            hourly_rows: hourly_batch.records.len(),
            skipped_rows: precip_batch.skipped_rows()
                + daily_batch.skipped_rows()
                + hourly_batch.skipped_rows(),
        })
    }

    /// Hand the sink back, e.g. to inspect an in-memory sink after a run
    pub fn into_sink(self) -> S {
        self.sink
    }
}
