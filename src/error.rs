use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Invalid {field} value: '{value}'")]
    Field { field: &'static str, value: String },

    #[error("Cannot build timestamp from date '{date}' and hour '{hour}'")]
    Timestamp { date: String, hour: String },

    #[error("Station key correlation failed: {submitted} records submitted, {returned} keys returned")]
    KeyCorrelation { submitted: usize, returned: usize },

    #[error("Cannot derive period id from '{0}': need at least 6 trailing characters")]
    PeriodId(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Sink error: {0}")]
    Sink(String),
}
