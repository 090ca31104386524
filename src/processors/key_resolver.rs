use std::collections::HashMap;

use crate::error::{LoadError, Result};
use crate::models::StationKey;

/// Write-once map from normalized WBAN identifier to storage-assigned key.
///
/// Built by zipping the station parser's ordered identifier list with the
/// ordered key list the sink returned for the same batch. The sink contract
/// is one inserted document per submitted record in submission order, so a
/// length mismatch means the correlation is broken and the load must abort.
#[derive(Debug)]
pub struct KeyResolver {
    map: HashMap<String, StationKey>,
}

impl KeyResolver {
    pub fn from_ordered(wbans: &[String], keys: &[StationKey]) -> Result<Self> {
        if wbans.len() != keys.len() {
            return Err(LoadError::KeyCorrelation {
                submitted: wbans.len(),
                returned: keys.len(),
            });
        }

        let map = wbans.iter().cloned().zip(keys.iter().cloned()).collect();

        Ok(Self { map })
    }

    pub fn resolve(&self, wban: &str) -> Option<&StationKey> {
        self.map.get(wban)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
