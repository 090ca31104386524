use chrono::NaiveDate;

use crate::error::{LoadError, Result};
use crate::utils::constants::DATE_FORMAT;

/// Normalize a WBAN identifier: trim surrounding whitespace, then strip
/// leading zeros so identifiers from differently padded files compare equal.
pub fn normalize_wban(raw: &str) -> String {
    raw.trim().trim_start_matches('0').to_string()
}

/// Parse a field whose validity is a precondition for the row meaning anything
pub fn required_f64(field: &'static str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| LoadError::Field {
        field,
        value: trimmed.to_string(),
    })
}

pub fn required_i32(field: &'static str, raw: &str) -> Result<i32> {
    let trimmed = raw.trim();
    trimmed.parse::<i32>().map_err(|_| LoadError::Field {
        field,
        value: trimmed.to_string(),
    })
}

/// Parse a measurement field, keeping the zero value when unparseable.
/// Measurement columns carry sentinel strings like "M" or "T" for missing
/// or trace values; those rows are still emitted.
pub fn optional_f64(raw: &str) -> f64 {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().unwrap_or_else(|_| {
        if !trimmed.is_empty() {
            tracing::debug!("unparseable measurement '{trimmed}', defaulting to 0.0");
        }
        0.0
    })
}

pub fn optional_i32(raw: &str) -> i32 {
    let trimmed = raw.trim();
    trimmed.parse::<i32>().unwrap_or_else(|_| {
        if !trimmed.is_empty() {
            tracing::debug!("unparseable measurement '{trimmed}', defaulting to 0");
        }
        0
    })
}

/// Parse a YYYYMMDD date field
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| LoadError::Field {
        field,
        value: trimmed.to_string(),
    })
}

/// Split a multi-valued observation field (sky condition, weather type)
/// into its whitespace-separated tokens
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
