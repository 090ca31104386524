use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;
use serde_json::json;

use crate::error::{LoadError, Result};
use crate::models::{DailyRecord, HourlyRecord, PrecipRecord, StationKey, StationRecord};
use crate::utils::FileKind;
use crate::writers::BatchSink;

/// Document sink writing one JSON Lines file per record kind.
///
/// Stands in for a document store: station documents get a generated `_key`
/// field and the keys are returned in submission order.
pub struct JsonlWriter {
    output_dir: PathBuf,
    next_key: u64,
}

impl JsonlWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            next_key: 0,
        }
    }

    fn write_documents<T: Serialize>(&self, kind: FileKind, documents: &[T]) -> Result<()> {
        create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(format!("{kind}.jsonl"));
        let mut writer = BufWriter::new(File::create(path)?);

        for document in documents {
            let line =
                serde_json::to_string(document).map_err(|e| LoadError::Sink(e.to_string()))?;
            writeln!(writer, "{line}")?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl BatchSink for JsonlWriter {
    fn insert_stations(&mut self, batch: &[StationRecord]) -> Result<Vec<StationKey>> {
        let mut keys = Vec::with_capacity(batch.len());
        let mut documents = Vec::with_capacity(batch.len());

        for record in batch {
            self.next_key += 1;
            let key = StationKey::new(format!("stn-{:08}", self.next_key));

            let mut document =
                serde_json::to_value(record).map_err(|e| LoadError::Sink(e.to_string()))?;
            if let Some(fields) = document.as_object_mut() {
                fields.insert("_key".to_string(), json!(key.as_str()));
            }

            documents.push(document);
            keys.push(key);
        }

        self.write_documents(FileKind::Station, &documents)?;
        Ok(keys)
    }

    fn insert_precip(&mut self, batch: &[PrecipRecord]) -> Result<()> {
        self.write_documents(FileKind::Precip, batch)
    }

    fn insert_dailies(&mut self, batch: &[DailyRecord]) -> Result<()> {
        self.write_documents(FileKind::Daily, batch)
    }

    fn insert_hourlies(&mut self, batch: &[HourlyRecord]) -> Result<()> {
        self.write_documents(FileKind::Hourly, batch)
    }
}
