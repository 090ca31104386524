pub mod constants;
pub mod fields;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use fields::normalize_wban;
pub use filename::{extract_file_path, period_id, FileKind};
pub use progress::ProgressReporter;
