use crate::error::Result;
use crate::models::{DailyRecord, HourlyRecord, PrecipRecord, StationKey, StationRecord};
use crate::writers::BatchSink;

/// In-memory sink used by validate mode and tests.
///
/// Retains every inserted batch and assigns sequential station keys with the
/// same order-correlation contract as a real document store.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub stations: Vec<StationRecord>,
    pub precip: Vec<PrecipRecord>,
    pub dailies: Vec<DailyRecord>,
    pub hourlies: Vec<HourlyRecord>,
    next_key: u64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BatchSink for MemorySink {
    fn insert_stations(&mut self, batch: &[StationRecord]) -> Result<Vec<StationKey>> {
        let keys = batch
            .iter()
            .map(|_| {
                self.next_key += 1;
                StationKey::new(format!("mem-{:08}", self.next_key))
            })
            .collect();

        self.stations.extend_from_slice(batch);
        Ok(keys)
    }

    fn insert_precip(&mut self, batch: &[PrecipRecord]) -> Result<()> {
        self.precip.extend_from_slice(batch);
        Ok(())
    }

    fn insert_dailies(&mut self, batch: &[DailyRecord]) -> Result<()> {
        self.dailies.extend_from_slice(batch);
        Ok(())
    }

    fn insert_hourlies(&mut self, batch: &[HourlyRecord]) -> Result<()> {
        self.hourlies.extend_from_slice(batch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_key_per_station_in_order() {
        let mut sink = MemorySink::new();

        let station = StationRecord {
            wban: "94756".to_string(),
            wmo: String::new(),
            call_sign: String::new(),
            climate_division_code: String::new(),
            climate_division_state_code: String::new(),
            climate_division_station_code: String::new(),
            name: "TEST".to_string(),
            state: "NJ".to_string(),
            location: String::new(),
            latitude: 40.5,
            longitude: -74.2,
            ground_height: 10,
            station_height: String::new(),
            barometer: String::new(),
            time_zone: "-5".to_string(),
        };

        let first = sink.insert_stations(&[station.clone()]).unwrap();
        let second = sink.insert_stations(&[station]).unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_ne!(first[0], second[0]);
        assert_eq!(sink.stations.len(), 2);
    }
}
