use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{LoadError, Result};
use crate::utils::constants::{
    DAILY_FILE_SUFFIX, HOURLY_FILE_SUFFIX, PERIOD_ID_LEN, PRECIP_FILE_SUFFIX, STATION_FILE_SUFFIX,
};

/// The four CSV files that make up a monthly extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Station,
    Precip,
    Daily,
    Hourly,
}

impl FileKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            FileKind::Station => STATION_FILE_SUFFIX,
            FileKind::Precip => PRECIP_FILE_SUFFIX,
            FileKind::Daily => DAILY_FILE_SUFFIX,
            FileKind::Hourly => HOURLY_FILE_SUFFIX,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Derive the period id (year + month, e.g. "201712") from the trailing
/// characters of the extract path. Paths like "QCLCD201712" and
/// "test201712" both yield "201712".
pub fn period_id(input: &Path) -> Result<String> {
    let raw = input.to_string_lossy();
    let chars: Vec<char> = raw.chars().collect();

    if chars.len() < PERIOD_ID_LEN {
        return Err(LoadError::PeriodId(raw.into_owned()));
    }

    Ok(chars[chars.len() - PERIOD_ID_LEN..].iter().collect())
}

/// Build the path of one extract file: `{input}/{period}{kind}.csv`
pub fn extract_file_path(input: &Path, kind: FileKind) -> Result<PathBuf> {
    let period = period_id(input)?;
    Ok(input.join(format!("{}{}.csv", period, kind.suffix())))
}
